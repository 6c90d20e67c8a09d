use std::sync::Arc;

use sr_core::config::AppConfig;
use sr_core::ports::{CredentialStorePort, EventCachePort, NotificationPermissionPort, RemoteApiPort};

use crate::usecases::{
    ClearAuthDetails, FetchLastMoment, GetAuthDetails, GetRegion, NotificationDispatcher,
    NotificationDispatcherDeps, PollScheduler, SessionManager, SetAuthDetails, SetRegion,
};
use crate::AppDeps;

/// The assembled subsystem.
///
/// Long-lived pieces (session, dispatcher, poll registration) are built once
/// here so every caller shares the same single-flight refresh slot. Short
/// lived use cases are created on demand through [`App::usecases`].
pub struct App {
    session: Arc<SessionManager>,
    dispatcher: Arc<NotificationDispatcher>,
    poll: Arc<PollScheduler>,
    credential_store: Arc<dyn CredentialStorePort>,
    remote_api: Arc<dyn RemoteApiPort>,
    event_cache: Arc<dyn EventCachePort>,
    permission: Arc<dyn NotificationPermissionPort>,
    config: AppConfig,
}

impl App {
    /// This constructor signature is the dependency manifest.
    /// 构造函数签名即依赖清单。
    pub fn new(deps: AppDeps) -> Self {
        let AppDeps {
            credential_store,
            remote_api,
            event_cache,
            notifier,
            permission,
            job_scheduler,
            clock,
            config,
        } = deps;

        let session = Arc::new(SessionManager::new(
            credential_store.clone(),
            remote_api.clone(),
        ));
        let dispatcher = Arc::new(NotificationDispatcher::from_deps(
            NotificationDispatcherDeps {
                session: session.clone(),
                credential_store: credential_store.clone(),
                remote: remote_api.clone(),
                event_cache: event_cache.clone(),
                notifier,
                permission: permission.clone(),
                clock,
                notifications: config.notifications.clone(),
            },
        ));
        let poll = Arc::new(PollScheduler::new(
            job_scheduler,
            dispatcher.clone(),
            config.poll.interval(),
        ));

        Self {
            session,
            dispatcher,
            poll,
            credential_store,
            remote_api,
            event_cache,
            permission,
            config,
        }
    }

    pub fn usecases(&self) -> UseCases<'_> {
        UseCases { app: self }
    }

    pub fn session(&self) -> &Arc<SessionManager> {
        &self.session
    }

    pub fn dispatcher(&self) -> &Arc<NotificationDispatcher> {
        &self.dispatcher
    }

    pub fn poll(&self) -> &Arc<PollScheduler> {
        &self.poll
    }

    pub fn permission(&self) -> &Arc<dyn NotificationPermissionPort> {
        &self.permission
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

/// Use case accessor for [`App`].
/// 用例访问器。
///
/// Commands ask for a use case here instead of knowing which ports it needs.
pub struct UseCases<'a> {
    app: &'a App,
}

impl<'a> UseCases<'a> {
    pub fn set_auth_details(&self) -> SetAuthDetails {
        SetAuthDetails::new(self.app.session.clone(), self.app.poll.clone())
    }

    pub fn get_auth_details(&self) -> GetAuthDetails {
        GetAuthDetails::new(self.app.session.clone())
    }

    pub fn clear_auth_details(&self) -> ClearAuthDetails {
        ClearAuthDetails::new(self.app.session.clone(), self.app.poll.clone())
    }

    pub fn set_region(&self) -> SetRegion {
        SetRegion::new(self.app.credential_store.clone())
    }

    pub fn get_region(&self) -> GetRegion {
        GetRegion::new(self.app.credential_store.clone())
    }

    pub fn fetch_last_moment(&self) -> FetchLastMoment {
        FetchLastMoment::new(
            self.app.session.clone(),
            self.app.credential_store.clone(),
            self.app.remote_api.clone(),
            self.app.event_cache.clone(),
        )
    }
}
