use crate::db::EmployeeStore;
use crate::errors::ServiceError;
use crate::models::Employee;
use actix_web::{delete, get, post, put, web, HttpResponse, Responder};

#[get("")]
pub async fn get_employees(store: web::Data<EmployeeStore>) -> impl Responder {
    HttpResponse::Ok().json(store.list().await)
}

#[get("/{id}")]
pub async fn get_employee(
    path: web::Path<i32>,
    store: web::Data<EmployeeStore>,
) -> Result<HttpResponse, ServiceError> {
    let id = path.into_inner();
    match store.get(id).await {
        Some(employee) => Ok(HttpResponse::Ok().json(employee)),
        None => Err(ServiceError::NotFound),
    }
}

#[post("")]
pub async fn create_employee(
    employee: web::Json<Employee>,
    store: web::Data<EmployeeStore>,
) -> impl Responder {
    let created = store.insert(employee.into_inner()).await;
    HttpResponse::Ok().json(created)
}

#[put("/{id}")]
pub async fn update_employee(
    path: web::Path<i32>,
    employee: web::Json<Employee>,
    store: web::Data<EmployeeStore>,
) -> Result<HttpResponse, ServiceError> {
    let id = path.into_inner();
    let employee = employee.into_inner();
    if id != employee.employee_id {
        return Err(ServiceError::IdMismatch);
    }

    match store.update(employee).await {
        Some(updated) => Ok(HttpResponse::Ok().json(updated)),
        None => Err(ServiceError::NotFound),
    }
}

#[delete("/{id}")]
pub async fn delete_employee(
    path: web::Path<i32>,
    store: web::Data<EmployeeStore>,
) -> Result<HttpResponse, ServiceError> {
    let id = path.into_inner();
    if store.get(id).await.is_none() {
        return Err(ServiceError::NotFound);
    }
    Ok(HttpResponse::Ok().json(store.remove(id).await))
}
