pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;
pub mod log;
pub mod model;
pub mod setup;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;
pub use log::{CapturedLog, LogCapture};
pub use setup::user_tables;

pub mod prelude {
    pub use crate::{
        constant::{TEST_EMAIL, TEST_GROUP_NAME, TEST_PASSWORD, TEST_USERNAME},
        fixtures::user::factory,
        test_setup_with_tables, test_setup_with_user_tables, LogCapture, TestBuilder,
        TestContext, TestError,
    };
}
