use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::feedback::requests::{CreateFeedbackRequest, UpdateFeedbackRequest};
use crate::models::users::entities::UserRole;
use crate::services::{FeedbackService, MarkService};
use crate::utils::{SafeAssignmentIdI64, SafeFeedbackIdI64, SafeModuleIdI64, SafeUserIdI64};

// 懒加载的全局服务实例
static MARK_SERVICE: Lazy<MarkService> = Lazy::new(MarkService::new_lazy);
static FEEDBACK_SERVICE: Lazy<FeedbackService> = Lazy::new(FeedbackService::new_lazy);

// HTTP处理程序
pub async fn get_student_marks(
    req: HttpRequest,
    module_id: SafeModuleIdI64,
    user_id: SafeUserIdI64,
) -> ActixResult<HttpResponse> {
    MARK_SERVICE
        .get_student_marks(&req, module_id.0, user_id.0)
        .await
}

pub async fn export_marks(
    req: HttpRequest,
    assignment_id: SafeAssignmentIdI64,
) -> ActixResult<HttpResponse> {
    let format = req.match_info().get("format").unwrap_or_default().to_string();
    MARK_SERVICE
        .export_marks(&req, assignment_id.0, &format)
        .await
}

pub async fn add_feedback(
    req: HttpRequest,
    feedback_data: web::Json<CreateFeedbackRequest>,
) -> ActixResult<HttpResponse> {
    FEEDBACK_SERVICE
        .add_feedback(&req, feedback_data.into_inner())
        .await
}

pub async fn update_feedback(
    req: HttpRequest,
    feedback_id: SafeFeedbackIdI64,
    feedback_data: web::Json<UpdateFeedbackRequest>,
) -> ActixResult<HttpResponse> {
    FEEDBACK_SERVICE
        .edit_feedback(&req, feedback_id.0, feedback_data.into_inner())
        .await
}

pub async fn delete_feedback(
    req: HttpRequest,
    feedback_id: SafeFeedbackIdI64,
) -> ActixResult<HttpResponse> {
    FEEDBACK_SERVICE.remove_feedback(&req, feedback_id.0).await
}

// 配置路由
pub fn configure_feedback_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/v1/feedback")
            .wrap(middlewares::RequireJWT)
            .service(
                // 学生只能查看自己的成绩，教职工可查看任意学生
                web::resource("/marks/{module_id}/{user_id}")
                    .route(web::get().to(get_student_marks)),
            )
            .service(
                web::resource("/download/{assignment_id}/{format}").route(
                    web::get()
                        .to(export_marks)
                        .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles())),
                ),
            )
            .service(
                web::resource("").route(
                    web::post()
                        .to(add_feedback)
                        .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles())),
                ),
            )
            .service(
                web::resource("/{feedback_id}")
                    .route(
                        web::put()
                            .to(update_feedback)
                            .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles())),
                    )
                    .route(
                        web::delete()
                            .to(delete_feedback)
                            .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles())),
                    ),
            ),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
    use actix_web::{App, test};
    use std::sync::Arc;

    use crate::models::ErrorCode;
    use crate::models::marks::entities::{RosterRow, StudentMarkRow};
    use crate::storage::Storage;
    use crate::storage::test_support::StubStorage;
    use crate::utils::jwt::JwtUtils;

    macro_rules! app {
        ($stub:expr) => {{
            let storage: Arc<dyn Storage> = Arc::new($stub);
            test::init_service(
                App::new()
                    .app_data(
                        web::JsonConfig::default().error_handler(crate::utils::json_error_handler),
                    )
                    .app_data(web::Data::new(storage))
                    .configure(configure_feedback_routes),
            )
            .await
        }};
    }

    fn bearer(user_id: i64, role: &str) -> (&'static str, String) {
        let token = JwtUtils::generate_access_token(user_id, role).unwrap();
        ("Authorization", format!("Bearer {token}"))
    }

    fn roster() -> Vec<RosterRow> {
        vec![RosterRow {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            username: "alovelace".to_string(),
            comment: "Great".to_string(),
            mark: 7.0,
            total_marks: 10.0,
        }]
    }

    #[actix_web::test]
    async fn test_student_reads_own_marks() {
        let app = app!(StubStorage::with_student_rows(vec![StudentMarkRow {
            assign_name: "Essay".to_string(),
            mark: 7.5,
            comment: "Clear argument".to_string(),
            total_marks: 10.0,
        }]));

        let req = test::TestRequest::get()
            .uri("/v1/feedback/marks/1/5")
            .insert_header(bearer(5, "student"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(
            json,
            serde_json::json!({
                "feedback": [{
                    "assignName": "Essay",
                    "markFormatted": "7.5/10 (75.00%)",
                    "comment": "Clear argument"
                }]
            })
        );
    }

    #[actix_web::test]
    async fn test_student_cannot_read_other_marks() {
        let app = app!(StubStorage::default());
        let req = test::TestRequest::get()
            .uri("/v1/feedback/marks/1/6")
            .insert_header(bearer(5, "student"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }

    #[actix_web::test]
    async fn test_no_marks_is_not_found() {
        let app = app!(StubStorage::default());
        let req = test::TestRequest::get()
            .uri("/v1/feedback/marks/1/6")
            .insert_header(bearer(2, "lecturer"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(
            json["message"],
            "No marks found for the specified moduleID and userID"
        );
    }

    #[actix_web::test]
    async fn test_requires_token() {
        let app = app!(StubStorage::default());
        let req = test::TestRequest::get()
            .uri("/v1/feedback/marks/1/6")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_csv_download() {
        let app = app!(StubStorage::with_roster(roster()));
        let req = test::TestRequest::get()
            .uri("/v1/feedback/download/3/csv")
            .insert_header(bearer(2, "lecturer"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers().get(CONTENT_TYPE).unwrap(), "text/csv");
        assert_eq!(
            resp.headers().get(CONTENT_DISPOSITION).unwrap(),
            "attachment; filename=student_marks.csv"
        );

        let body = test::read_body(resp).await;
        let text = std::str::from_utf8(&body).unwrap();
        assert!(text.starts_with("StudentFirstName,StudentLastName"));
        assert!(text.contains("Ada,Lovelace,alovelace,Great,7,10,70.00"));
    }

    #[actix_web::test]
    async fn test_xlsx_download_headers() {
        let app = app!(StubStorage::with_roster(roster()));
        let req = test::TestRequest::get()
            .uri("/v1/feedback/download/3/xlsx")
            .insert_header(bearer(1, "admin"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get(CONTENT_TYPE).unwrap(),
            "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
        );
        assert_eq!(
            resp.headers().get(CONTENT_DISPOSITION).unwrap(),
            "attachment; filename=student_marks.xlsx"
        );
    }

    #[actix_web::test]
    async fn test_bad_format_is_bad_request() {
        let app = app!(StubStorage::with_roster(roster()));
        let req = test::TestRequest::get()
            .uri("/v1/feedback/download/3/pdf")
            .insert_header(bearer(2, "lecturer"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(
            json["message"],
            "Invalid format specified. Use either \"xlsx\" or \"csv\"."
        );
        assert_eq!(json["code"], ErrorCode::ExportFormatInvalid as i32);
    }

    #[actix_web::test]
    async fn test_students_cannot_download() {
        let app = app!(StubStorage::with_roster(roster()));
        let req = test::TestRequest::get()
            .uri("/v1/feedback/download/3/csv")
            .insert_header(bearer(5, "student"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }

    #[actix_web::test]
    async fn test_storage_failure_hides_detail() {
        let app = app!(StubStorage::failing());
        let req = test::TestRequest::get()
            .uri("/v1/feedback/download/3/csv")
            .insert_header(bearer(2, "lecturer"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["message"], "Internal server error");
    }

    #[actix_web::test]
    async fn test_feedback_lifecycle() {
        let app = app!(StubStorage {
            submissions: vec![4],
            ..Default::default()
        });

        let req = test::TestRequest::post()
            .uri("/v1/feedback")
            .insert_header(bearer(2, "lecturer"))
            .set_json(serde_json::json!({"submissionID": 4, "comment": "Nice", "mark": 8}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["message"], "Feedback added successfully");
        let feedback_id = json["data"]["feedbackID"].as_i64().unwrap();

        let req = test::TestRequest::post()
            .uri("/v1/feedback")
            .insert_header(bearer(2, "lecturer"))
            .set_json(serde_json::json!({"submissionID": 4, "comment": "Again", "mark": 9}))
            .to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::CONFLICT
        );

        let req = test::TestRequest::put()
            .uri(&format!("/v1/feedback/{feedback_id}"))
            .insert_header(bearer(2, "lecturer"))
            .set_json(serde_json::json!({"comment": "Nicer", "mark": 9}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["data"]["comment"], "Nicer");
        assert_eq!(json["data"]["user_id"], 2);

        let req = test::TestRequest::delete()
            .uri(&format!("/v1/feedback/{feedback_id}"))
            .insert_header(bearer(2, "lecturer"))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

        let req = test::TestRequest::delete()
            .uri(&format!("/v1/feedback/{feedback_id}"))
            .insert_header(bearer(2, "lecturer"))
            .to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::NOT_FOUND
        );
    }

    #[actix_web::test]
    async fn test_create_feedback_validation() {
        let app = app!(StubStorage::default());
        let req = test::TestRequest::post()
            .uri("/v1/feedback")
            .insert_header(bearer(2, "lecturer"))
            .set_json(serde_json::json!({"submissionID": 4, "mark": 8}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(
            json["message"],
            "Submission ID, comment, and mark are required"
        );
    }
}
