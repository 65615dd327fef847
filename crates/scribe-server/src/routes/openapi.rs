use axum::{Json, Router, extract::State, routing::get};
use scribe::article::ArticleResult;
use scribe::generic::ResponseText;
use utoipa::OpenApi;
use utoipa::openapi::{self, Contact, Info, License};

use crate::settings::AppSettings;
use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(super::agent::send_message, super::article::generate_article),
    components(schemas(ResponseText, ArticleResult)),
    tags(
        (name = "agent", description = "Direct messages to the model"),
        (name = "article", description = "Topic to summary and article")
    )
)]
pub struct ApiDoc;

/// API description with the `info` block taken from the `app` settings.
pub fn document(app: &AppSettings) -> openapi::OpenApi {
    let mut info = Info::new(app.title.clone(), app.version.clone());
    info.description = Some(app.description.clone());
    info.contact = app.contact.as_ref().map(|settings| {
        let mut contact = Contact::new();
        contact.name = settings.name.clone();
        contact.url = settings.url.clone();
        contact.email = settings.email.clone();
        contact
    });
    info.license = app.license_info.as_ref().map(|settings| {
        let mut license = License::new(settings.name.clone());
        license.url = settings.url.clone();
        license
    });

    let mut doc = ApiDoc::openapi();
    doc.info = info;
    doc
}

async fn openapi_json(State(state): State<AppState>) -> Json<openapi::OpenApi> {
    Json(document(&state.info))
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/openapi.json", get(openapi_json))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{ContactSettings, LicenseSettings};

    #[test]
    fn info_block_follows_app_settings() {
        let app = AppSettings {
            title: "Newsroom".to_string(),
            version: "1.0".to_string(),
            contact: Some(ContactSettings {
                name: Some("Desk".to_string()),
                email: Some("desk@example.org".to_string()),
                ..ContactSettings::default()
            }),
            license_info: Some(LicenseSettings {
                name: "MIT".to_string(),
                url: None,
            }),
            ..AppSettings::default()
        };

        let json = serde_json::to_value(document(&app)).unwrap();

        assert_eq!(json["info"]["title"], "Newsroom");
        assert_eq!(json["info"]["version"], "1.0");
        assert_eq!(json["info"]["contact"]["name"], "Desk");
        assert_eq!(json["info"]["contact"]["email"], "desk@example.org");
        assert_eq!(json["info"]["license"]["name"], "MIT");
    }

    #[test]
    fn both_operations_and_their_schemas_are_described() {
        let json = serde_json::to_value(document(&AppSettings::default())).unwrap();

        assert!(json["paths"]["/api/v1/agent"]["post"].is_object());
        assert!(json["paths"]["/api/v1/article-agent"]["post"].is_object());
        assert!(json["components"]["schemas"]["ResponseText"].is_object());
        assert!(
            json["components"]["schemas"]["ArticleResult"]["properties"]["article"].is_object()
        );
    }
}
