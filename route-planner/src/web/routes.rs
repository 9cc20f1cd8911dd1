//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::booking::{
    BookingAction, BookingError, JourneySelection, PassengerDetails, PaymentDetails,
    TripSelection,
};
use crate::domain::Itinerary;
use crate::planner::{PlanOutcome, Planner};
use crate::sessions::SessionError;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/cities", get(list_cities))
        .route("/api/plan", post(plan_journey))
        .route("/api/bookings", post(create_booking))
        .route("/api/bookings/:id", get(get_booking))
        .route("/api/bookings/:id/select", post(select_journey))
        .route("/api/bookings/:id/passenger", post(submit_passenger))
        .route("/api/bookings/:id/payment", post(submit_payment))
        .route("/api/bookings/:id/restart", post(restart_booking))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// List known cities with coordinates, sorted by name.
async fn list_cities(State(state): State<AppState>) -> Json<CitiesResponse> {
    let cities = state
        .catalog
        .locations()
        .map(CityResult::from_location)
        .collect();

    Json(CitiesResponse { cities })
}

/// Plan a journey, and optionally its return.
async fn plan_journey(
    State(state): State<AppState>,
    Json(body): Json<PlanRequestBody>,
) -> Result<Json<PlanResponse>, AppError> {
    let request = body.to_request().map_err(AppError::bad_request)?;
    let planner = Planner::new(&state.catalog);

    let response = if body.round_trip {
        let trip = planner.plan_round_trip(&request);
        PlanResponse {
            outbound: OutcomeResult::from_outcome(&trip.outbound),
            inbound: Some(OutcomeResult::from_outcome(&trip.inbound)),
        }
    } else {
        PlanResponse {
            outbound: OutcomeResult::from_outcome(&planner.plan(&request)),
            inbound: None,
        }
    };

    Ok(Json(response))
}

/// Start a booking session.
async fn create_booking(State(state): State<AppState>) -> (StatusCode, Json<BookingResponse>) {
    let (id, flow) = state.sessions.create().await;
    (StatusCode::CREATED, Json(BookingResponse::new(id, flow)))
}

/// Current state of a booking.
async fn get_booking(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<BookingResponse>, AppError> {
    let flow = state.sessions.get(&id).await?;
    Ok(Json(BookingResponse::new(id, flow)))
}

/// Choose the journey to book.
///
/// The plan is recomputed from the request so the client only ever sends
/// candidate indices, never itineraries.
async fn select_journey(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<SelectJourneyBody>,
) -> Result<Json<BookingResponse>, AppError> {
    state.sessions.get(&id).await?;

    let request = body.plan.to_request().map_err(AppError::bad_request)?;
    let planner = Planner::new(&state.catalog);

    let outbound = TripSelection {
        date: body.journey_date,
        itinerary: pick(planner.plan(&request), body.outbound_choice, "outbound_choice")?,
    };

    let journey = match (body.return_date, body.return_choice) {
        (None, None) => JourneySelection::one_way(outbound),
        (Some(date), Some(choice)) => {
            let inbound = TripSelection {
                date,
                itinerary: pick(planner.plan(&request.reversed()), choice, "return_choice")?,
            };
            JourneySelection::round_trip(outbound, inbound)?
        }
        _ => {
            return Err(AppError::bad_request(
                "return_date and return_choice must be given together",
            ));
        }
    };

    let flow = state
        .sessions
        .apply(&id, BookingAction::SelectJourney(journey))
        .await?;
    Ok(Json(BookingResponse::new(id, flow)))
}

/// Submit passenger details.
async fn submit_passenger(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(details): Json<PassengerDetails>,
) -> Result<Json<BookingResponse>, AppError> {
    let flow = state
        .sessions
        .apply(&id, BookingAction::SubmitPassenger(details))
        .await?;
    Ok(Json(BookingResponse::new(id, flow)))
}

/// Pay and confirm.
async fn submit_payment(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payment): Json<PaymentDetails>,
) -> Result<Json<BookingResponse>, AppError> {
    let flow = state.sessions.apply(&id, BookingAction::Pay(payment)).await?;
    Ok(Json(BookingResponse::new(id, flow)))
}

/// Go back to searching.
async fn restart_booking(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<BookingResponse>, AppError> {
    let flow = state.sessions.apply(&id, BookingAction::Restart).await?;
    Ok(Json(BookingResponse::new(id, flow)))
}

/// Take the candidate at `index`, or fail with a 400.
fn pick(outcome: PlanOutcome, index: usize, field: &str) -> Result<Itinerary, AppError> {
    let count = outcome.candidates.len();
    outcome.candidates.into_iter().nth(index).ok_or_else(|| {
        AppError::bad_request(format!(
            "{field} {index} is out of range ({count} candidates)"
        ))
    })
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Conflict { message: String },
}

impl AppError {
    fn bad_request(message: impl Into<String>) -> Self {
        AppError::BadRequest {
            message: message.into(),
        }
    }
}

impl From<BookingError> for AppError {
    fn from(e: BookingError) -> Self {
        match e {
            BookingError::InvalidTransition { .. } => AppError::Conflict {
                message: e.to_string(),
            },
            _ => AppError::BadRequest {
                message: e.to_string(),
            },
        }
    }
}

impl From<SessionError> for AppError {
    fn from(e: SessionError) -> Self {
        match e {
            SessionError::NotFound(_) => AppError::NotFound {
                message: e.to_string(),
            },
            SessionError::Booking(e) => e.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Conflict { message } => (StatusCode::CONFLICT, message),
        };

        warn!(%status, "{message}");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::BookingState;
    use crate::catalog::RouteCatalog;
    use crate::domain::{City, DepartureTime, Fare, Location, Mode, RouteRecord};
    use crate::sessions::SessionConfig;

    fn city(s: &str) -> City {
        City::parse(s).unwrap()
    }

    fn record(from: &str, to: &str, mode: Mode, rupees: u64, mins: u32) -> RouteRecord {
        RouteRecord::new(
            city(from),
            city(to),
            mode,
            Fare::from_rupees(rupees),
            mins,
            DepartureTime::parse("08:00").unwrap(),
        )
        .unwrap()
    }

    fn state() -> AppState {
        let mut builder = RouteCatalog::builder();
        for (name, lat, lon) in [
            ("Udaipur", 24.58, 73.71),
            ("Jaipur", 26.91, 75.79),
            ("Ajmer", 26.45, 74.64),
        ] {
            builder
                .add_location(Location::new(city(name), lat, lon).unwrap())
                .unwrap();
        }
        for r in [
            record("Jaipur", "Udaipur", Mode::Bus, 500, 300),
            record("Jaipur", "Udaipur", Mode::Train, 350, 360),
            record("Udaipur", "Jaipur", Mode::Bus, 450, 320),
            record("Jaipur", "Ajmer", Mode::Bus, 150, 150),
            record("Ajmer", "Udaipur", Mode::Train, 250, 240),
        ] {
            builder.add_route(r).unwrap();
        }
        AppState::new(builder.build(), &SessionConfig::default())
    }

    fn plan_body(json: &str) -> PlanRequestBody {
        serde_json::from_str(json).unwrap()
    }

    fn select_body(json: &str) -> SelectJourneyBody {
        serde_json::from_str(json).unwrap()
    }

    async fn new_booking(state: &AppState) -> String {
        state.sessions.create().await.0
    }

    #[tokio::test]
    async fn health_is_ok() {
        assert_eq!(health().await, "ok");
    }

    #[tokio::test]
    async fn cities_are_sorted() {
        let Json(response) = list_cities(State(state())).await;
        let names: Vec<_> = response.cities.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Ajmer", "Jaipur", "Udaipur"]);
        assert_eq!(response.cities[1].latitude, 26.91);
    }

    #[tokio::test]
    async fn plan_direct_picks_fastest() {
        let body = plan_body(r#"{"origin":"Jaipur","destination":"Udaipur","modes":["Bus","Train"]}"#);
        let Json(response) = plan_journey(State(state()), Json(body)).await.unwrap();

        assert_eq!(response.outbound.candidates.len(), 2);
        let optimal = response.outbound.optimal.unwrap();
        assert_eq!(optimal.summary, "Bus");
        assert_eq!(optimal.duration_mins, 300);
        let cheapest = response.outbound.cheapest.unwrap();
        assert_eq!(cheapest.summary, "Train");
        assert!(response.inbound.is_none());
    }

    #[tokio::test]
    async fn plan_unknown_city_is_empty_not_error() {
        let body = plan_body(r#"{"origin":"Jodhpur","destination":"Bikaner"}"#);
        let Json(response) = plan_journey(State(state()), Json(body)).await.unwrap();
        assert!(response.outbound.optimal.is_none());
        assert!(response.outbound.candidates.is_empty());
    }

    #[tokio::test]
    async fn plan_unknown_mode_is_bad_request() {
        let body = plan_body(r#"{"origin":"Jaipur","destination":"Udaipur","modes":["Ferry"]}"#);
        let err = plan_journey(State(state()), Json(body)).await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest { .. }));
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn plan_round_trip_plans_both_directions() {
        let body = plan_body(
            r#"{"origin":"Jaipur","destination":"Udaipur","modes":["Bus","Train"],
                "intermediate":"None","round_trip":true}"#,
        );
        let Json(response) = plan_journey(State(state()), Json(body)).await.unwrap();
        assert_eq!(response.outbound.candidates.len(), 2);
        let inbound = response.inbound.unwrap();
        assert_eq!(inbound.candidates.len(), 1);
        assert_eq!(inbound.candidates[0].legs[0].origin, "Udaipur");
    }

    #[tokio::test]
    async fn plan_via_intermediate() {
        let body = plan_body(
            r#"{"origin":"Jaipur","destination":"Udaipur","modes":["Bus","Train"],"intermediate":"Ajmer"}"#,
        );
        let Json(response) = plan_journey(State(state()), Json(body)).await.unwrap();
        assert_eq!(response.outbound.candidates.len(), 1);
        assert_eq!(
            response.outbound.candidates[0].summary,
            "Bus via Ajmer, then Train"
        );
    }

    #[tokio::test]
    async fn full_booking_flow() {
        let state = state();
        let (status, Json(created)) = create_booking(State(state.clone())).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created.state, BookingState::Searching);
        assert!(created.reference.starts_with("RP-"));

        let id = created.id;
        let body = select_body(
            r#"{"origin":"Jaipur","destination":"Udaipur","modes":["Bus","Train"],
                "journey_date":"2024-12-01","outbound_choice":1,
                "return_date":"2024-12-05","return_choice":0}"#,
        );
        let Json(response) = select_journey(State(state.clone()), Path(id.clone()), Json(body))
            .await
            .unwrap();
        assert!(matches!(response.state, BookingState::CollectingPassenger { .. }));

        let details: PassengerDetails = serde_json::from_str(
            r#"{"name":"Kiran","age":52,"contact":"0141 2222 333","seats":2}"#,
        )
        .unwrap();
        let Json(response) = submit_passenger(State(state.clone()), Path(id.clone()), Json(details))
            .await
            .unwrap();
        assert!(matches!(response.state, BookingState::Paying { .. }));

        let payment: PaymentDetails = serde_json::from_str(
            r#"{"method":"credit_card","card_number":"4000 1234 5678 9010","expiry":"11/28","cvv":"456"}"#,
        )
        .unwrap();
        let Json(response) = submit_payment(State(state.clone()), Path(id.clone()), Json(payment))
            .await
            .unwrap();
        let BookingState::Confirmed { ticket } = response.state else {
            panic!("expected confirmed booking");
        };
        // (350 train out + 450 bus back) x 2 seats
        assert_eq!(ticket.total_fare, Fare::from_rupees(1600));
        assert_eq!(ticket.payment.card_last4, "9010");
        assert_eq!(ticket.reference, response.reference);

        let Json(response) = restart_booking(State(state.clone()), Path(id.clone()))
            .await
            .unwrap();
        assert_eq!(response.state, BookingState::Searching);
    }

    #[tokio::test]
    async fn unknown_session_is_not_found() {
        let err = get_booking(State(state()), Path("missing".to_string()))
            .await
            .unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn select_on_unknown_session_is_not_found() {
        let body = select_body(
            r#"{"origin":"Jaipur","destination":"Udaipur",
                "journey_date":"2024-12-01","outbound_choice":99}"#,
        );
        let err = select_journey(State(state()), Path("missing".to_string()), Json(body))
            .await
            .unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn out_of_order_action_is_conflict() {
        let state = state();
        let id = new_booking(&state).await;
        let details: PassengerDetails =
            serde_json::from_str(r#"{"name":"Kiran","age":52,"contact":"01412222333","seats":1}"#)
                .unwrap();
        let err = submit_passenger(State(state), Path(id), Json(details))
            .await
            .unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn choice_out_of_range_is_bad_request() {
        let state = state();
        let id = new_booking(&state).await;
        let body = select_body(
            r#"{"origin":"Jaipur","destination":"Udaipur","modes":["Bus"],
                "journey_date":"2024-12-01","outbound_choice":3}"#,
        );
        let err = select_journey(State(state.clone()), Path(id.clone()), Json(body))
            .await
            .unwrap_err();
        let AppError::BadRequest { message } = &err else {
            panic!("expected bad request, got {err:?}");
        };
        assert!(message.contains("outbound_choice 3"), "{message}");

        let Json(response) = get_booking(State(state), Path(id)).await.unwrap();
        assert_eq!(response.state, BookingState::Searching);
    }

    #[tokio::test]
    async fn return_fields_must_come_together() {
        let state = state();
        let id = new_booking(&state).await;
        let body = select_body(
            r#"{"origin":"Jaipur","destination":"Udaipur",
                "journey_date":"2024-12-01","outbound_choice":0,"return_choice":0}"#,
        );
        let err = select_journey(State(state), Path(id), Json(body))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest { .. }));
    }

    #[tokio::test]
    async fn early_return_date_is_bad_request() {
        let state = state();
        let id = new_booking(&state).await;
        let body = select_body(
            r#"{"origin":"Jaipur","destination":"Udaipur",
                "journey_date":"2024-12-05","outbound_choice":0,
                "return_date":"2024-12-01","return_choice":0}"#,
        );
        let err = select_journey(State(state), Path(id), Json(body))
            .await
            .unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn invalid_passenger_is_bad_request() {
        let state = state();
        let id = new_booking(&state).await;
        let body = select_body(
            r#"{"origin":"Jaipur","destination":"Udaipur",
                "journey_date":"2024-12-01","outbound_choice":0}"#,
        );
        let Json(response) = select_journey(State(state.clone()), Path(id.clone()), Json(body))
            .await
            .unwrap();
        assert!(matches!(response.state, BookingState::CollectingPassenger { .. }));

        let details: PassengerDetails =
            serde_json::from_str(r#"{"name":"Kiran","age":52,"contact":"01412222333","seats":11}"#)
                .unwrap();
        let err = submit_passenger(State(state), Path(id), Json(details))
            .await
            .unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
