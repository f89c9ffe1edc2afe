//! Entry point: decides between the todo screen and the missing-user notice.

use crate::api::TodoApi;
use crate::client::TodoClient;
use crate::config::ClientConfig;
use crate::controller::TodoController;
use crate::error::ConfigError;
use crate::transport::{ReqwestTransport, Transport};

pub const USER_WARNING: &str =
    "Please get your user id and set TODO_USER_ID before using the todo list.";

pub enum Screen<T> {
    /// No user id configured: nothing is rendered and no call is made.
    UserWarning,
    Ready(TodoController<T>),
}

impl<T: Transport> Screen<T> {
    pub fn new(config: &ClientConfig, transport: T) -> Result<Self, ConfigError> {
        config.validate()?;
        let Some(user_id) = config.user_id else {
            tracing::info!("no user id configured");
            return Ok(Screen::UserWarning);
        };
        let client = TodoClient::new(&config.base_url, user_id);
        Ok(Screen::Ready(TodoController::new(TodoApi::new(client, transport))))
    }

    pub fn notice(&self) -> Option<&'static str> {
        match self {
            Screen::UserWarning => Some(USER_WARNING),
            Screen::Ready(_) => None,
        }
    }

    pub fn controller(&self) -> Option<&TodoController<T>> {
        match self {
            Screen::UserWarning => None,
            Screen::Ready(controller) => Some(controller),
        }
    }
}

impl Screen<ReqwestTransport> {
    /// Builds the screen from `TODO_API_URL` / `TODO_USER_ID`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::new(&ClientConfig::from_env()?, ReqwestTransport::default())
    }
}
