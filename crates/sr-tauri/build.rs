const COMMANDS: &[&str] = &[
    "set_auth_details",
    "get_auth_details",
    "clear_auth_details",
    "refresh_token",
    "set_region",
    "get_region",
    "fetch_last_moment",
    "check_permissions",
    "request_permissions",
    "permission_state",
];

fn main() {
    tauri_plugin::Builder::new(COMMANDS).build();
}
