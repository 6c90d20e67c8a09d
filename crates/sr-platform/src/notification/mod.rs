mod static_permission;

pub use static_permission::StaticNotificationPermission;
