mod user_model;
mod util;
