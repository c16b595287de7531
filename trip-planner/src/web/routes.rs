//! HTTP route handlers.

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use chrono::{Datelike, Local, Weekday};
use tracing::{error, warn};

use crate::booking::{BookingError, FareClass, InvalidFareClass, Passenger};
use crate::domain::ItineraryId;
use crate::planner::{FilterError, InvalidSortOrder, SortOrder};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/connections", get(list_connections))
        .route("/search", get(search_itineraries))
        .route("/itineraries/:id", get(get_itinerary))
        .route("/bookings", post(create_booking))
        .route("/reservations", get(list_reservations))
        .route("/trips", get(list_trips))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// List every connection in the timetable.
async fn list_connections(State(state): State<AppState>) -> Json<ConnectionsResponse> {
    let connections = state
        .timetable
        .iter()
        .map(|c| ConnectionResult::from_connection(c))
        .collect();
    let cities = state
        .timetable
        .cities()
        .into_iter()
        .map(|c| c.to_string())
        .collect();

    Json(ConnectionsResponse {
        connections,
        cities,
    })
}

/// Search for itineraries and make them the session's latest results.
async fn search_itineraries(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<SearchResponse>, AppError> {
    // Validate everything before touching the session
    let filter = query.filter.parse()?;
    let order = match query.sort.as_deref().map(str::trim) {
        Some(s) if !s.is_empty() => s.parse::<SortOrder>()?,
        _ => SortOrder::default(),
    };

    let mut session = state.session.lock().await;
    session.search(&state.timetable, &filter);
    let results = session.sort(order);

    Ok(Json(SearchResponse::from_results(results, order)))
}

/// Look up an itinerary from the latest search.
async fn get_itinerary(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ItineraryResult>, AppError> {
    let session = state.session.lock().await;
    let itinerary = session
        .itinerary(&ItineraryId::new(id.trim()))
        .ok_or_else(|| AppError::NotFound {
            message: format!("Itinerary {id} not found in the latest search"),
        })?;

    Ok(Json(ItineraryResult::from_itinerary(itinerary)))
}

/// Book passengers on an itinerary from the latest search.
async fn create_booking(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<BookingsResponse>), AppError> {
    // Parse JSON manually so we can log the body on failure
    let req: BookingRequest = serde_json::from_slice(&body).map_err(|e| {
        warn!(error = %e, body = %String::from_utf8_lossy(&body), "invalid booking request");
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })?;

    let passengers = req
        .passengers
        .iter()
        .map(PassengerRequest::to_passenger)
        .collect::<Result<Vec<Passenger>, _>>()?;

    let class = match req.fare_class.as_deref() {
        Some(s) => s.parse::<FareClass>()?,
        None => FareClass::default(),
    };

    let itinerary = {
        let session = state.session.lock().await;
        session
            .itinerary(&ItineraryId::new(req.itinerary_id.trim()))
            .cloned()
            .ok_or_else(|| AppError::NotFound {
                message: format!(
                    "Itinerary {} not found in the latest search",
                    req.itinerary_id
                ),
            })?
    };

    let mut desk = state.bookings.lock().await;
    let bookings = desk.book(&itinerary, passengers, class)?;

    Ok((
        StatusCode::CREATED,
        Json(BookingsResponse::from_bookings(&bookings)),
    ))
}

/// List a passenger's bookings.
async fn list_reservations(
    State(state): State<AppState>,
    Query(query): Query<ReservationQuery>,
) -> Json<BookingsResponse> {
    let desk = state.bookings.lock().await;
    let bookings = desk.reservations_for(&query.first_name, &query.last_name);

    Json(BookingsResponse::from_bookings(bookings))
}

/// List a document holder's trips, split by whether they run today.
async fn list_trips(
    State(state): State<AppState>,
    Query(query): Query<TripsQuery>,
) -> Result<Json<TripsResponse>, AppError> {
    trips_on(&state, &query, Local::now().weekday()).await
}

async fn trips_on(
    state: &AppState,
    query: &TripsQuery,
    today: Weekday,
) -> Result<Json<TripsResponse>, AppError> {
    if query.id_document.trim().is_empty() {
        return Err(AppError::BadRequest {
            message: "id_document is required".to_string(),
        });
    }

    let desk = state.bookings.lock().await;
    let trips = desk.trips_for(&query.last_name, &query.id_document, today);

    Ok(Json(TripsResponse::from_trips(&trips)))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<FilterError> for AppError {
    fn from(e: FilterError) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl From<InvalidSortOrder> for AppError {
    fn from(e: InvalidSortOrder) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl From<InvalidFareClass> for AppError {
    fn from(e: InvalidFareClass) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl From<BookingError> for AppError {
    fn from(e: BookingError) -> Self {
        match e {
            BookingError::NoPassengers | BookingError::InvalidPassenger(_) => {
                AppError::BadRequest {
                    message: e.to_string(),
                }
            }
            BookingError::DuplicateBooking(_) => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, %message, "request failed");
        } else {
            warn!(%status, %message, "request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{City, ClockTime, ConnectionRecord, DaysOfOperation, Fare, RouteId};
    use crate::planner::FilterInput;
    use crate::timetable::Timetable;

    fn conn(id: &str, from: &str, to: &str, dep: &str, arr: &str, first: u64, second: u64) -> ConnectionRecord {
        ConnectionRecord::new(
            RouteId::new(id).unwrap(),
            City::parse(from).unwrap(),
            City::parse(to).unwrap(),
            ClockTime::parse(dep).unwrap(),
            ClockTime::parse(arr).unwrap(),
        )
        .unwrap()
        .with_train_type("TGV")
        .with_fares(Fare::from_units(first), Fare::from_units(second))
    }

    fn state() -> AppState {
        AppState::new(
            Timetable::new(vec![
                conn("R1", "Paris", "Lyon", "08:00", "10:00", 50, 30),
                conn("R2", "Lyon", "Nice", "11:00", "13:00", 40, 20),
                conn("R3", "Paris", "Nice", "07:00", "13:30", 90, 60),
            ])
            .unwrap(),
        )
    }

    fn query(from: &str, to: &str) -> SearchQuery {
        SearchQuery {
            filter: FilterInput {
                from: Some(from.to_string()),
                to: Some(to.to_string()),
                ..Default::default()
            },
            sort: None,
        }
    }

    async fn search(state: &AppState, query: SearchQuery) -> Result<SearchResponse, AppError> {
        search_itineraries(State(state.clone()), Query(query))
            .await
            .map(|Json(body)| body)
    }

    fn booking_body(itinerary_id: &str, class: Option<&str>) -> Bytes {
        let class = class.map_or(String::new(), |c| format!(r#", "fare_class": "{c}""#));
        Bytes::from(format!(
            r#"{{"itinerary_id": "{itinerary_id}",
                 "passengers": [{{"first_name": "Ada", "last_name": "Lovelace", "age": 36, "id_document": "P1"}}]{class}}}"#
        ))
    }

    #[tokio::test]
    async fn health_check() {
        assert_eq!(health().await, "ok");
    }

    #[tokio::test]
    async fn lists_connections_and_cities() {
        let Json(body) = list_connections(State(state())).await;
        assert_eq!(body.connections.len(), 3);
        assert_eq!(body.cities, vec!["Paris", "Lyon", "Nice"]);
    }

    #[tokio::test]
    async fn search_returns_direct_and_indirect() {
        let state = state();
        let body = search(&state, query("Paris", "Nice")).await.unwrap();

        assert_eq!(body.sort, "duration_asc");
        assert_eq!(body.direct.len(), 1);
        assert_eq!(body.direct[0].id, "TRIP0001");
        assert_eq!(body.indirect.len(), 1);
        assert_eq!(body.indirect[0].total_time, "04:00:00");
    }

    #[tokio::test]
    async fn search_applies_sort() {
        let state = AppState::new(
            Timetable::new(vec![
                conn("R1", "Paris", "Nice", "08:00", "14:00", 90, 20),
                conn("R2", "Paris", "Nice", "07:00", "13:30", 90, 60),
            ])
            .unwrap(),
        );
        let mut q = query("Paris", "Nice");
        q.sort = Some("price_desc".to_string());
        let body = search(&state, q).await.unwrap();

        let prices: Vec<f64> = body.direct.iter().map(|i| i.total_second_class).collect();
        assert_eq!(prices, vec![60.0, 20.0]);
    }

    #[tokio::test]
    async fn search_without_departure_city_is_empty() {
        let mut q = query("Paris", "Nice");
        q.filter.from = None;
        let body = search(&state(), q).await.unwrap();

        assert!(body.direct.is_empty());
        assert!(body.indirect.is_empty());
    }

    #[tokio::test]
    async fn search_rejects_malformed_filter() {
        let mut q = query("Paris", "Nice");
        q.filter.max_first = Some("lots".to_string());
        let result = search(&state(), q).await;
        assert!(matches!(result, Err(AppError::BadRequest { .. })));
    }

    #[tokio::test]
    async fn search_rejects_unknown_sort() {
        let mut q = query("Paris", "Nice");
        q.sort = Some("scenic".to_string());
        let result = search(&state(), q).await;
        assert!(matches!(result, Err(AppError::BadRequest { .. })));
    }

    #[tokio::test]
    async fn itinerary_lookup() {
        let state = state();
        search(&state, query("Paris", "Nice")).await.unwrap();

        let Json(found) = get_itinerary(State(state.clone()), Path("TRIP0002".to_string()))
            .await
            .unwrap();
        assert_eq!(found.legs.len(), 2);

        let missing = get_itinerary(State(state), Path("TRIP0042".to_string())).await;
        assert!(matches!(missing, Err(AppError::NotFound { .. })));
    }

    #[tokio::test]
    async fn booking_flow() {
        let state = state();
        search(&state, query("Paris", "Nice")).await.unwrap();

        let (status, Json(body)) = create_booking(State(state.clone()), booking_body("TRIP0002", Some("first")))
            .await
            .unwrap();
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body.bookings.len(), 1);

        let booking = &body.bookings[0];
        assert_eq!(booking.booking_id, "BOOK0001");
        assert_eq!(booking.reservation_id, "RES0001");
        assert_eq!(booking.ticket_id, "TICK0001");
        assert_eq!(booking.route_ids, vec!["R1", "R2"]);
        assert_eq!(booking.fare_class, "first");
        assert_eq!(booking.fare, 90.0);

        let Json(listed) = list_reservations(
            State(state),
            Query(ReservationQuery {
                first_name: "ada".to_string(),
                last_name: "LOVELACE".to_string(),
            }),
        )
        .await;
        assert_eq!(listed.bookings.len(), 1);
    }

    #[tokio::test]
    async fn trips_by_document() {
        let state = state();
        search(&state, query("Paris", "Nice")).await.unwrap();
        create_booking(State(state.clone()), booking_body("TRIP0002", None))
            .await
            .unwrap();

        let lookup = |last_name: &str, id_document: &str| TripsQuery {
            last_name: last_name.to_string(),
            id_document: id_document.to_string(),
        };

        // The test timetable leaves days of operation empty, so nothing runs today
        let Json(trips) = trips_on(&state, &lookup("love", "P1"), Weekday::Mon).await.unwrap();
        assert!(trips.current.is_empty());
        assert_eq!(trips.past.len(), 1);
        assert_eq!(trips.past[0].booking_id, "BOOK0001");

        let Json(other) = trips_on(&state, &lookup("Lovelace", "P9"), Weekday::Mon).await.unwrap();
        assert!(other.current.is_empty() && other.past.is_empty());

        let missing = trips_on(&state, &lookup("Lovelace", " "), Weekday::Mon).await;
        assert!(matches!(missing, Err(AppError::BadRequest { .. })));
    }

    #[tokio::test]
    async fn trips_current_when_running_today() {
        let state = AppState::new(
            Timetable::new(vec![
                conn("R1", "Paris", "Nice", "08:00", "14:00", 90, 20)
                    .with_days(DaysOfOperation::parse("Mon-Fri")),
            ])
            .unwrap(),
        );
        search(&state, query("Paris", "Nice")).await.unwrap();
        create_booking(State(state.clone()), booking_body("TRIP0001", None))
            .await
            .unwrap();

        let q = TripsQuery {
            last_name: String::new(),
            id_document: "P1".to_string(),
        };
        let Json(weekday) = trips_on(&state, &q, Weekday::Tue).await.unwrap();
        assert_eq!(weekday.current.len(), 1);
        assert_eq!(weekday.current[0].days, "Mon, Tue, Wed, Thu, Fri");

        let Json(weekend) = trips_on(&state, &q, Weekday::Sat).await.unwrap();
        assert_eq!(weekend.past.len(), 1);
    }

    #[tokio::test]
    async fn booking_unknown_itinerary() {
        let result = create_booking(State(state()), booking_body("TRIP0001", None)).await;
        assert!(matches!(result, Err(AppError::NotFound { .. })));
    }

    #[tokio::test]
    async fn booking_rejects_bad_input() {
        let state = state();
        search(&state, query("Paris", "Nice")).await.unwrap();

        let bad_json = create_booking(State(state.clone()), Bytes::from_static(b"{not json")).await;
        assert!(matches!(bad_json, Err(AppError::BadRequest { .. })));

        let bad_class = create_booking(State(state.clone()), booking_body("TRIP0001", Some("royal"))).await;
        assert!(matches!(bad_class, Err(AppError::BadRequest { .. })));

        let no_passengers = create_booking(
            State(state),
            Bytes::from_static(br#"{"itinerary_id": "TRIP0001", "passengers": []}"#),
        )
        .await;
        assert!(matches!(no_passengers, Err(AppError::BadRequest { .. })));
    }

    #[test]
    fn error_status_codes() {
        let bad = AppError::BadRequest { message: "x".into() }.into_response();
        let missing = AppError::NotFound { message: "x".into() }.into_response();
        let internal = AppError::Internal { message: "x".into() }.into_response();

        assert_eq!(bad.status(), StatusCode::BAD_REQUEST);
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
        assert_eq!(internal.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
