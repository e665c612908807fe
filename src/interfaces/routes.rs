use actix_web::web;

use crate::handlers::{
    candidates::{create_candidate, delete_candidate, get_candidate, list_candidates},
    home::home,
    system::health_check,
};

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(home)
        .service(health_check)
        .service(create_candidate)
        .service(list_candidates)
        .service(get_candidate)
        .service(delete_candidate);
}
