pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::export::handlers as export_handlers;
use crate::letters::handlers as letter_handlers;
use crate::salary::handlers as salary_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Letters API
        .route(
            "/api/v1/letters/categories",
            get(letter_handlers::handle_list_categories),
        )
        .route(
            "/api/v1/letters/prompt",
            post(letter_handlers::handle_preview_prompt),
        )
        .route(
            "/api/v1/letters/generate",
            post(letter_handlers::handle_generate_letter),
        )
        // Salary Slip API
        .route(
            "/api/v1/salary-slips/template",
            get(salary_handlers::handle_slip_template),
        )
        .route(
            "/api/v1/salary-slips/compute",
            post(salary_handlers::handle_compute_slip),
        )
        .route(
            "/api/v1/salary-slips/preview",
            post(salary_handlers::handle_preview_slip),
        )
        // Export API
        .route(
            "/api/v1/exports/pdf",
            post(export_handlers::handle_export_pdf)
                .layer(DefaultBodyLimit::max(export_handlers::MAX_UPLOAD_BYTES)),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use async_trait::async_trait;
    use tokio::sync::Notify;

    use super::*;
    use crate::config::CompanyProfile;
    use crate::letters::generator::test_support::StubGenerator;
    use crate::letters::models::LetterRequest;
    use crate::letters::session::SessionRegistry;
    use crate::llm_client::{LlmError, TextGenerator};

    fn state_with(generator: Arc<dyn TextGenerator>) -> AppState {
        AppState {
            generator,
            company: CompanyProfile {
                name: "Northwind Systems Pvt. Ltd.".to_string(),
                cin: "U72200KA2015PTC000001".to_string(),
                address: "4th Floor, MG Road, Bengaluru".to_string(),
            },
            letter_sessions: Arc::new(SessionRegistry::default()),
        }
    }

    fn app(reply: Option<&str>) -> Router {
        build_router(state_with(Arc::new(StubGenerator {
            reply: reply.map(str::to_string),
        })))
    }

    /// Holds every generation until the test opens the gate.
    struct GatedGenerator {
        gate: Arc<Notify>,
    }

    #[async_trait]
    impl TextGenerator for GatedGenerator {
        async fn generate(&self, _prompt: &str) -> Result<String, LlmError> {
            self.gate.notified().await;
            Ok("<div><p>Welcome aboard</p></div>".to_string())
        }
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn json_body(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn offer_body() -> Value {
        json!({
            "letterCategory": "offer",
            "candidate": {
                "name": "Asha Rao",
                "address": "12 Residency Road, Bengaluru",
                "position": "Software Engineer",
                "joiningDate": "2024-08-01",
                "reportingManager": "Vikram Shah"
            },
            "salary": {"annualCtc": "12,00,000"}
        })
    }

    fn slip_body() -> Value {
        json!({
            "employeeName": "Asha Rao",
            "employeeId": "NW-104",
            "designation": "Software Engineer",
            "month": "July",
            "year": "2024",
            "earnings": {"basic": 30000, "hra": 12000, "specialAllowance": 5000},
            "deductions": {"pf": 3600, "professionalTax": 200, "incomeTax": 1500}
        })
    }

    #[tokio::test]
    async fn test_health() {
        let response = app(None)
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["status"], "ok");
    }

    #[tokio::test]
    async fn test_generate_letter_passes_html_through() {
        let response = app(Some("<div><p>Welcome aboard</p></div>"))
            .oneshot(post_json("/api/v1/letters/generate", offer_body()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["html"], "<div><p>Welcome aboard</p></div>");
        assert_eq!(body["isFallback"], false);
        assert_eq!(body["letterType"], "Offer Letter");
        assert_eq!(body["fileName"], "Offer_Letter_Asha_Rao.pdf");
    }

    #[tokio::test]
    async fn test_generate_letter_failure_returns_fallback() {
        let response = app(None)
            .oneshot(post_json("/api/v1/letters/generate", offer_body()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["isFallback"], true);
        assert!(body["html"]
            .as_str()
            .unwrap()
            .contains("Failed to generate letter content"));
    }

    #[tokio::test]
    async fn test_generate_letter_rejects_invalid_form() {
        let mut body = offer_body();
        body["candidate"]["reportingManager"] = Value::Null;
        body["salary"]["annualCtc"] = json!("abc");
        let response = app(Some("<div></div>"))
            .oneshot(post_json("/api/v1/letters/generate", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert!(body["error"]["fields"]["reportingManager"].is_string());
        assert!(body["error"]["fields"]["annualCtc"].is_string());
    }

    #[tokio::test]
    async fn test_duplicate_submit_while_generating_conflicts() {
        let gate = Arc::new(Notify::new());
        let state = state_with(Arc::new(GatedGenerator { gate: gate.clone() }));
        let sessions = state.letter_sessions.clone();
        let app = build_router(state);
        let form: LetterRequest = serde_json::from_value(offer_body()).unwrap();

        let first = tokio::spawn(
            app.clone()
                .oneshot(post_json("/api/v1/letters/generate", offer_body())),
        );
        while !sessions.is_generating(&form) {
            tokio::task::yield_now().await;
        }

        let second = app
            .clone()
            .oneshot(post_json("/api/v1/letters/generate", offer_body()))
            .await
            .unwrap();
        assert_eq!(second.status(), StatusCode::CONFLICT);
        assert_eq!(json_body(second).await["error"]["code"], "CONFLICT");

        gate.notify_one();
        let first = first.await.unwrap().unwrap();
        assert_eq!(first.status(), StatusCode::OK);
        assert!(!sessions.is_generating(&form));
    }

    #[tokio::test]
    async fn test_prompt_preview_for_relieving() {
        let body = json!({
            "letterCategory": "Relieving Letter",
            "candidate": {
                "name": "Asha Rao",
                "address": "12 Residency Road, Bengaluru",
                "position": "Software Engineer",
                "joiningDate": "2022-01-10",
                "lastWorkingDay": "2024-06-30"
            },
            "salary": {"annualCtc": "12,00,000"}
        });
        let response = app(None)
            .oneshot(post_json("/api/v1/letters/prompt", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let prompt = json_body(response).await["prompt"]
            .as_str()
            .unwrap()
            .to_string();
        assert!(prompt.contains("2024-06-30"));
        assert!(!prompt.contains("Reporting Manager"));
    }

    #[tokio::test]
    async fn test_categories_listed_in_order() {
        let response = app(None)
            .oneshot(
                Request::get("/api/v1/letters/categories")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let body = json_body(response).await;
        let labels: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["label"].as_str().unwrap())
            .collect();
        assert_eq!(
            labels,
            vec![
                "Offer Letter",
                "Appointment Letter",
                "Relieving Letter",
                "Experience Letter"
            ]
        );
    }

    #[tokio::test]
    async fn test_compute_slip() {
        let response = app(None)
            .oneshot(post_json("/api/v1/salary-slips/compute", slip_body()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["totals"]["totalEarnings"], 47000.0);
        assert_eq!(body["totals"]["totalDeductions"], 5300.0);
        assert_eq!(body["totals"]["netSalary"], 41700.0);
        assert_eq!(body["formatted"]["netSalary"], "₹41,700.00");
        assert_eq!(body["netSalaryInWords"], "Forty One Thousand Seven Hundred");
        assert_eq!(body["fileName"], "Salary_Slip_Asha_Rao_July_2024.pdf");
    }

    #[tokio::test]
    async fn test_compute_slip_accepts_text_amounts() {
        let mut body = slip_body();
        body["earnings"]["basic"] = json!("30000");
        body["deductions"]["incomeTax"] = json!("");
        let response = app(None)
            .oneshot(post_json("/api/v1/salary-slips/compute", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["totals"]["totalDeductions"], 3800.0);
        assert_eq!(body["totals"]["netSalary"], 43200.0);
    }

    #[tokio::test]
    async fn test_compute_slip_rejects_negative_item() {
        let mut body = slip_body();
        body["deductions"]["incomeTax"] = json!(-5);
        let response = app(None)
            .oneshot(post_json("/api/v1/salary-slips/compute", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert!(body["error"]["fields"]["incomeTax"].is_string());
    }

    #[tokio::test]
    async fn test_preview_slip_is_html() {
        let response = app(None)
            .oneshot(post_json("/api/v1/salary-slips/preview", slip_body()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let html = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(html.contains("Salary Slip for July 2024"));
        assert!(html.contains("Forty One Thousand Seven Hundred Rupees Only"));
        assert!(html.contains("Northwind Systems Pvt. Ltd."));
    }

    #[tokio::test]
    async fn test_template_has_zero_amounts() {
        let response = app(None)
            .oneshot(
                Request::get("/api/v1/salary-slips/template")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let body = json_body(response).await;
        assert_eq!(body["earnings"]["basic"], 0.0);
        assert_eq!(body["year"].as_str().unwrap().len(), 4);
    }

    fn multipart_body(boundary: &str, image: &[u8], fields: &[(&str, &str)]) -> Vec<u8> {
        let mut body = Vec::new();
        for (name, value) in fields {
            body.extend_from_slice(
                format!(
                    "--{boundary}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
                )
                .as_bytes(),
            );
        }
        body.extend_from_slice(
            format!(
                "--{boundary}\r\nContent-Disposition: form-data; name=\"image\"; filename=\"slip.png\"\r\nContent-Type: image/png\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(image);
        body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());
        body
    }

    #[tokio::test]
    async fn test_export_pdf_attachment() {
        use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
        use std::io::Cursor;

        let mut png = Vec::new();
        DynamicImage::ImageRgb8(RgbImage::from_pixel(60, 80, Rgb([250, 250, 250])))
            .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
            .unwrap();

        let boundary = "hrdeskboundary";
        let body = multipart_body(
            boundary,
            &png,
            &[
                ("documentType", "Salary Slip"),
                ("primaryName", "Asha Rao"),
                ("month", "July"),
                ("year", "2024"),
            ],
        );
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/exports/pdf")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .unwrap();

        let response = app(None).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/pdf"
        );
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"Salary_Slip_Asha_Rao_July_2024.pdf\""
        );
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
    }

    #[tokio::test]
    async fn test_export_pdf_requires_image() {
        let boundary = "hrdeskboundary";
        let mut body = Vec::new();
        body.extend_from_slice(
            format!(
                "--{boundary}\r\nContent-Disposition: form-data; name=\"documentType\"\r\n\r\nOffer Letter\r\n--{boundary}--\r\n"
            )
            .as_bytes(),
        );
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/exports/pdf")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .unwrap();

        let response = app(None).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert!(body["error"]["fields"]["image"].is_string());
        assert!(body["error"]["fields"]["primaryName"].is_string());
    }
}
