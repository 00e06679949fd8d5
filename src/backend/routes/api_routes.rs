/**
 * API Routes
 *
 * ## Snippets (JSON)
 * - `POST /store/code`
 * - `POST /get/code`
 * - `GET /get/codes`
 * - `POST /get/user/snippets`
 * - `PUT /update/code`
 * - `POST /snippet/delete`
 *
 * ## Blogs (multipart for writes)
 * - `POST /store/blog`
 * - `POST /get/blog`
 * - `GET /get/blogs`
 * - `POST /get/user/blogs`
 * - `POST /search/blogs`
 * - `PUT /update/blog`
 * - `POST /blog/delete`
 *
 * ## Generation
 * - `POST /ai/code/generate`
 */

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::backend::blogs::{
    delete_blog, get_blog, list_blogs, list_user_blogs, search_blogs, store_blog, update_blog,
};
use crate::backend::generation::handlers::generate_code;
use crate::backend::server::state::AppState;
use crate::backend::snippets::{
    delete_snippet, get_snippet, list_snippets, list_user_snippets, store_snippet,
    update_snippet,
};

/// Configure snippet, blog and generation routes
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        // Snippets
        .route("/store/code", post(store_snippet))
        .route("/get/code", post(get_snippet))
        .route("/get/codes", get(list_snippets))
        .route("/get/user/snippets", post(list_user_snippets))
        .route("/update/code", put(update_snippet))
        .route("/snippet/delete", post(delete_snippet))
        // Blogs
        .route("/store/blog", post(store_blog))
        .route("/get/blog", post(get_blog))
        .route("/get/blogs", get(list_blogs))
        .route("/get/user/blogs", post(list_user_blogs))
        .route("/search/blogs", post(search_blogs))
        .route("/update/blog", put(update_blog))
        .route("/blog/delete", post(delete_blog))
        // Generation
        .route("/ai/code/generate", post(generate_code))
}
