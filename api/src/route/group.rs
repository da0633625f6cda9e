use axum::{
    routing::{delete, get},
    Router,
};
use registry::AppRegistry;

use crate::handler::group::{
    delete_group, join_group, leave_group, register_group, show_group, show_group_list,
    update_group,
};

pub fn build_group_routers() -> Router<AppRegistry> {
    let groups_routers = Router::new()
        .route("/", get(show_group_list).post(register_group))
        // POST on the entity path joins the group.
        .route(
            "/{group_id}",
            get(show_group)
                .patch(update_group)
                .delete(delete_group)
                .post(join_group),
        )
        .route("/{group_id}/unsubscribe", delete(leave_group));

    Router::new().nest("/groups", groups_routers)
}
