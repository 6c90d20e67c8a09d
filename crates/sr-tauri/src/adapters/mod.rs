mod notifier;

pub use notifier::TauriNotifier;
