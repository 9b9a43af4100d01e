mod creation;
mod groups_and_permissions;
mod save;
mod string_representation;
