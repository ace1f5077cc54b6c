//! Health endpoints: liveness and readiness probes.
//!
//! Readiness flips once startup (including the database bootstrap
//! attempt) has finished; liveness stays true until shutdown begins so
//! orchestrators restart a draining process instead of routing to it.

use std::sync::atomic::{AtomicBool, Ordering};

use actix_web::{HttpResponse, get, http::header, web};
use serde::Serialize;

/// Shared readiness and liveness flags.
pub struct HealthState {
    ready: AtomicBool,
    live: AtomicBool,
}

impl Default for HealthState {
    fn default() -> Self {
        Self {
            ready: AtomicBool::new(false),
            live: AtomicBool::new(true),
        }
    }
}

/// JSON payload returned by both probes.
#[derive(Debug, Serialize)]
pub struct ProbeBody {
    /// Either `"ok"` or `"unavailable"`.
    pub status: &'static str,
}

impl HealthState {
    /// A state that is live but not yet ready.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark startup as finished.
    pub fn mark_ready(&self) {
        self.ready.store(true, Ordering::Release);
    }

    /// Flag the process as draining so liveness probes fail fast.
    pub fn mark_unhealthy(&self) {
        self.live.store(false, Ordering::Release);
    }

    /// Whether the service can take traffic.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }

    /// Whether the process should report itself alive.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.live.load(Ordering::Acquire)
    }

    fn probe_response(probe_ok: bool) -> HttpResponse {
        let mut response = if probe_ok {
            HttpResponse::Ok()
        } else {
            HttpResponse::ServiceUnavailable()
        };
        let status = if probe_ok { "ok" } else { "unavailable" };
        response
            .insert_header((header::CACHE_CONTROL, "no-store"))
            .json(ProbeBody { status })
    }
}

/// Readiness probe: 200 once startup finished, 503 before that.
#[utoipa::path(
    get,
    path = "/health/ready",
    tags = ["health"],
    responses(
        (status = 200, description = "Server is ready to handle traffic"),
        (status = 503, description = "Server is still starting up")
    )
)]
#[get("/health/ready")]
pub async fn ready(state: web::Data<HealthState>) -> HttpResponse {
    HealthState::probe_response(state.is_ready())
}

/// Liveness probe: 200 while running, 503 once draining.
#[utoipa::path(
    get,
    path = "/health/live",
    tags = ["health"],
    responses(
        (status = 200, description = "Server is alive"),
        (status = 503, description = "Server is shutting down")
    )
)]
#[get("/health/live")]
pub async fn live(state: web::Data<HealthState>) -> HttpResponse {
    HealthState::probe_response(state.is_alive())
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use super::*;
    use actix_web::App;
    use actix_web::test::{TestRequest, call_service, init_service};

    #[test]
    fn state_transitions_are_monotonic_per_flag() {
        let state = HealthState::new();
        assert!(!state.is_ready());
        assert!(state.is_alive());

        state.mark_ready();
        assert!(state.is_ready());

        state.mark_unhealthy();
        assert!(!state.is_alive());
        assert!(state.is_ready(), "draining does not unset readiness");
    }

    #[actix_web::test]
    async fn ready_probe_reports_startup_state() {
        let state = web::Data::new(HealthState::new());
        let app = init_service(App::new().app_data(state.clone()).service(ready)).await;

        let before =
            call_service(&app, TestRequest::get().uri("/health/ready").to_request()).await;
        assert_eq!(before.status(), 503);

        state.mark_ready();
        let after =
            call_service(&app, TestRequest::get().uri("/health/ready").to_request()).await;
        assert_eq!(after.status(), 200);
        assert_eq!(
            after
                .headers()
                .get(header::CACHE_CONTROL)
                .and_then(|v| v.to_str().ok()),
            Some("no-store")
        );
    }

    #[actix_web::test]
    async fn live_probe_fails_once_draining() {
        let state = web::Data::new(HealthState::new());
        let app = init_service(App::new().app_data(state.clone()).service(live)).await;

        let healthy =
            call_service(&app, TestRequest::get().uri("/health/live").to_request()).await;
        assert_eq!(healthy.status(), 200);

        state.mark_unhealthy();
        let draining =
            call_service(&app, TestRequest::get().uri("/health/live").to_request()).await;
        assert_eq!(draining.status(), 503);
    }
}
