use axum::{
    routing::{get, post},
    Router,
};

use crate::{controller, model::app::AppState};

/// Builds the full route table.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/auth", post(controller::auth::authenticate))
        .route("/user", get(controller::user::search_users))
        .route("/user/{user_id}", get(controller::user::get_user))
        .route("/team", post(controller::team::create_team))
        .route(
            "/team/{team_id}",
            get(controller::team::get_team)
                .put(controller::team::update_team)
                .delete(controller::team::delete_team),
        )
        .route(
            "/team/{team_id}/user/{user_id}",
            post(controller::team::add_team_member).delete(controller::team::remove_team_member),
        )
        .route(
            "/room",
            get(controller::room::list_rooms).post(controller::room::create_room),
        )
        .route(
            "/room/{room_id}",
            get(controller::room::get_room)
                .put(controller::room::update_room)
                .delete(controller::room::delete_room),
        )
        .route("/feature", get(controller::room::list_features))
        .route(
            "/reservation",
            get(controller::reservation::list_reservations)
                .post(controller::reservation::create_reservation),
        )
        .route(
            "/reservation/{reservation_id}",
            get(controller::reservation::get_reservation)
                .put(controller::reservation::update_reservation)
                .delete(controller::reservation::delete_reservation),
        )
}
