use crate::auth::TokenService;
use crate::db::UserStore;
use crate::models::{AuthResult, LoginRequest, RegisterRequest};
use actix_web::{post, web, HttpResponse, Responder};
use validator::Validate;

#[post("/login")]
pub async fn login(
    data: web::Json<LoginRequest>,
    users: web::Data<UserStore>,
    tokens: web::Data<TokenService>,
) -> impl Responder {
    if data.validate().is_err() {
        return HttpResponse::BadRequest()
            .json(AuthResult::failure("Invalid authentication request"));
    }

    // Unknown email gets the same generic message as a malformed request so
    // the endpoint never reveals whether an account exists.
    let user = match users.find_by_email(&data.email).await {
        Some(user) => user,
        None => {
            return HttpResponse::BadRequest()
                .json(AuthResult::failure("Invalid authentication request"))
        }
    };

    if !users.verify_password(&user, &data.password) {
        return HttpResponse::BadRequest().json(AuthResult::failure("Invalid credentials"));
    }

    issue_token(&tokens, &user.id, &user.email)
}

#[post("/register")]
pub async fn register(
    data: web::Json<RegisterRequest>,
    users: web::Data<UserStore>,
    tokens: web::Data<TokenService>,
) -> impl Responder {
    if data.validate().is_err() {
        return HttpResponse::BadRequest()
            .json(AuthResult::failure("Invalid authentication request"));
    }

    if users.find_by_email(&data.email).await.is_some() {
        return HttpResponse::BadRequest()
            .json(AuthResult::failure("User with this email already exists"));
    }

    let user = match users.create(&data.email, &data.password).await {
        Ok(user) => user,
        Err(e) => {
            log::warn!("User creation failed for {}: {}", data.email, e);
            return HttpResponse::BadRequest()
                .json(AuthResult::failure("Server Error: User creation failed"));
        }
    };

    log::info!("New user registered: {}", user.email);
    issue_token(&tokens, &user.id, &user.email)
}

fn issue_token(tokens: &TokenService, user_id: &str, email: &str) -> HttpResponse {
    match tokens.issue(user_id, email) {
        Ok(token) => HttpResponse::Ok().json(AuthResult::success(token)),
        Err(e) => {
            log::error!("Token issuance failed: {}", e);
            HttpResponse::BadRequest().json(AuthResult::failure("Server Error"))
        }
    }
}
