use authentication_test_utils::prelude::*;

mod password;
mod save;
