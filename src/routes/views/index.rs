use askama::Template;
use axum::{
    Router,
    http::StatusCode,
    response::Html,
    routing::get,
};

use crate::routes::API_PREFIX;

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    project_name: &'static str,
    api_url: String,
}

type HtmlError = (StatusCode, Html<String>);

pub fn router() -> Router {
    Router::new().route("/", get(index))
}

async fn index() -> Result<Html<String>, HtmlError> {
    let template = IndexTemplate {
        project_name: env!("CARGO_PKG_NAME"),
        api_url: format!("{API_PREFIX}/todos"),
    };
    let rendered = template.render().map_err(|err| {
        tracing::error!(error = %err, "failed to render index");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Html("failed to render page".to_string()),
        )
    })?;
    Ok(Html(rendered))
}

#[cfg(test)]
mod tests {
    use askama::Template;

    use super::IndexTemplate;

    #[test]
    fn renders_the_api_url_into_the_page() {
        let html = IndexTemplate {
            project_name: "todo_api",
            api_url: "/api/todos".to_string(),
        }
        .render()
        .expect("template should render");

        assert!(html.contains("const API_URL = \"/api/todos\";"));
        assert!(html.contains("<title>todo_api</title>"));
    }
}
