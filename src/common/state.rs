use std::sync::Arc;

use crate::routes::info::AppInfo;

#[derive(Clone)]
pub struct AppState {
    /// Built once at startup; `/info` serves it as-is.
    pub app_info: Arc<AppInfo>,
}

impl AppState {
    pub fn new(app_info: AppInfo) -> Self {
        Self {
            app_info: Arc::new(app_info),
        }
    }
}
