use thiserror::Error;

use crate::model::script::ScriptError;
use crate::model::video::VideoIdError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Script(#[from] ScriptError),
    #[error(transparent)]
    VideoId(#[from] VideoIdError),
}
