use actix_web::{web, HttpResponse};

use crate::errors::AppError;
use crate::models::employee::{Employee, EmployeePayload};
use crate::service::employee::EmployeeService;

pub const DELETED_MESSAGE: &str = "Employee deleted successfully!";

/// Mounts the employee routes under `/api/v1/employees`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/employees")
            .app_data(
                web::JsonConfig::default()
                    .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into()),
            )
            .service(
                web::resource(["", "/"])
                    .route(web::get().to(get_employees))
                    .route(web::post().to(create_employee)),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_employee))
                    .route(web::put().to(update_employee))
                    .route(web::delete().to(delete_employee)),
            ),
    );
}

pub async fn get_employees(
    service: web::Data<EmployeeService>,
) -> Result<HttpResponse, AppError> {
    let employees = service.get_all_employees().await?;
    Ok(HttpResponse::Ok().json(employees))
}

pub async fn get_employee(
    service: web::Data<EmployeeService>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    match service.get_employee_by_id(id.into_inner()).await? {
        Some(employee) => Ok(HttpResponse::Ok().json(employee)),
        None => Ok(HttpResponse::NotFound().finish()),
    }
}

pub async fn create_employee(
    service: web::Data<EmployeeService>,
    payload: web::Json<EmployeePayload>,
) -> Result<HttpResponse, AppError> {
    let created = service
        .save_employee(Employee::from(payload.into_inner()))
        .await?;
    Ok(HttpResponse::Created().json(created))
}

pub async fn update_employee(
    service: web::Data<EmployeeService>,
    id: web::Path<i64>,
    payload: web::Json<EmployeePayload>,
) -> Result<HttpResponse, AppError> {
    // Fetch first so an unknown id is a plain 404 with no body.
    let Some(mut employee) = service.get_employee_by_id(id.into_inner()).await? else {
        return Ok(HttpResponse::NotFound().finish());
    };

    employee.apply(payload.into_inner());
    let updated = service.update_employee(employee).await?;
    Ok(HttpResponse::Ok().json(updated))
}

pub async fn delete_employee(
    service: web::Data<EmployeeService>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    service.delete_employee(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(DELETED_MESSAGE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{EmployeeRepository, InMemoryEmployeeRepository};
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use serde_json::{json, Value};
    use std::sync::Arc;

    fn martin() -> Employee {
        Employee::new("Martín", "Díaz", "magadiflo@gmail.com")
    }

    /// Builds the app over a fresh in-memory store and hands back the store for seeding.
    async fn setup() -> (
        impl actix_web::dev::Service<
            actix_http::Request,
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
        >,
        Arc<InMemoryEmployeeRepository>,
    ) {
        let repository = Arc::new(InMemoryEmployeeRepository::new());
        let service = EmployeeService::new(repository.clone());
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(service))
                .configure(configure),
        )
        .await;
        (app, repository)
    }

    #[actix_web::test]
    async fn lists_all_employees() {
        let (app, repository) = setup().await;
        for i in 0..5 {
            repository
                .save(Employee::new("Name", "Last", &format!("user{}@mail.com", i)))
                .await
                .unwrap();
        }

        let req = test::TestRequest::get().uri("/api/v1/employees").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Vec<Employee> = test::read_body_json(resp).await;
        assert_eq!(body.len(), 5);
    }

    #[actix_web::test]
    async fn lists_empty_collection_with_trailing_slash() {
        let (app, _) = setup().await;

        let req = test::TestRequest::get().uri("/api/v1/employees/").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!([]));
    }

    #[actix_web::test]
    async fn gets_employee_by_id() {
        let (app, repository) = setup().await;
        let saved = repository.save(martin()).await.unwrap();

        let req = test::TestRequest::get()
            .uri(&format!("/api/v1/employees/{}", saved.id.unwrap()))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["firstName"], "Martín");
        assert_eq!(body["lastName"], "Díaz");
        assert_eq!(body["email"], "magadiflo@gmail.com");
    }

    #[actix_web::test]
    async fn unknown_id_is_not_found_with_empty_body() {
        let (app, _) = setup().await;

        let req = test::TestRequest::get().uri("/api/v1/employees/1").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert!(test::read_body(resp).await.is_empty());
    }

    #[actix_web::test]
    async fn creates_employee() {
        let (app, _) = setup().await;

        let req = test::TestRequest::post()
            .uri("/api/v1/employees")
            .set_json(json!({
                "firstName": "Martín",
                "lastName": "Díaz",
                "email": "magadiflo@gmail.com"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: Employee = test::read_body_json(resp).await;
        assert_eq!(body.id, Some(1));
        assert_eq!(Employee { id: None, ..body }, martin());
    }

    #[actix_web::test]
    async fn create_with_taken_email_is_conflict() {
        let (app, repository) = setup().await;
        repository.save(martin()).await.unwrap();

        let req = test::TestRequest::post()
            .uri("/api/v1/employees")
            .set_json(json!({
                "firstName": "Otro",
                "lastName": "Martín",
                "email": "magadiflo@gmail.com"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CONFLICT);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body["error"],
            "Employee already exist with given email magadiflo@gmail.com"
        );
        assert_eq!(repository.find_all().await.unwrap().len(), 1);
    }

    #[actix_web::test]
    async fn malformed_body_is_bad_request() {
        let (app, _) = setup().await;

        let req = test::TestRequest::post()
            .uri("/api/v1/employees")
            .set_json(json!({ "firstName": "Martín" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert!(body["error"].is_string());
    }

    #[actix_web::test]
    async fn updates_employee() {
        let (app, repository) = setup().await;
        let saved = repository.save(martin()).await.unwrap();

        let req = test::TestRequest::put()
            .uri(&format!("/api/v1/employees/{}", saved.id.unwrap()))
            .set_json(json!({
                "firstName": "Gaspi",
                "lastName": "Florecilla",
                "email": "gaspi_florecilla@gmail.com"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Employee = test::read_body_json(resp).await;
        assert_eq!(
            body,
            Employee {
                id: saved.id,
                ..Employee::new("Gaspi", "Florecilla", "gaspi_florecilla@gmail.com")
            }
        );
    }

    #[actix_web::test]
    async fn update_of_unknown_id_is_not_found() {
        let (app, _) = setup().await;

        let req = test::TestRequest::put()
            .uri("/api/v1/employees/77")
            .set_json(json!({
                "firstName": "Gaspi",
                "lastName": "Florecilla",
                "email": "gaspi_florecilla@gmail.com"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert!(test::read_body(resp).await.is_empty());
    }

    #[actix_web::test]
    async fn update_to_taken_email_is_conflict() {
        let (app, repository) = setup().await;
        repository.save(martin()).await.unwrap();
        let gaspi = repository
            .save(Employee::new("Gaspi", "Florecilla", "gaspi_florecilla@gmail.com"))
            .await
            .unwrap();

        let req = test::TestRequest::put()
            .uri(&format!("/api/v1/employees/{}", gaspi.id.unwrap()))
            .set_json(json!({
                "firstName": "Gaspi",
                "lastName": "Florecilla",
                "email": "magadiflo@gmail.com"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CONFLICT);
        assert_eq!(
            repository.find_by_id(gaspi.id.unwrap()).await.unwrap(),
            Some(gaspi)
        );
    }

    #[actix_web::test]
    async fn deletes_employee_then_get_is_not_found() {
        let (app, repository) = setup().await;
        let saved = repository.save(martin()).await.unwrap();
        let uri = format!("/api/v1/employees/{}", saved.id.unwrap());

        let req = test::TestRequest::delete().uri(&uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: String = test::read_body_json(resp).await;
        assert_eq!(body, DELETED_MESSAGE);

        let req = test::TestRequest::get().uri(&uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn deleting_unknown_id_still_succeeds() {
        let (app, _) = setup().await;

        let req = test::TestRequest::delete().uri("/api/v1/employees/999").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: String = test::read_body_json(resp).await;
        assert_eq!(body, DELETED_MESSAGE);
    }

    #[actix_web::test]
    async fn non_numeric_id_is_not_found() {
        let (app, _) = setup().await;

        let req = test::TestRequest::get().uri("/api/v1/employees/abc").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
