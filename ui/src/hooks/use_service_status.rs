use payloads::responses::{HealthStatus, ServiceInfo};
use yew::prelude::*;
use yewdux::prelude::*;

use crate::{State, get_api_client};

#[derive(Debug, Clone, PartialEq)]
pub struct ServiceStatus {
    pub info: ServiceInfo,
    pub health: HealthStatus,
}

pub struct ServiceStatusHookReturn {
    pub status: Option<ServiceStatus>,
    pub is_loading: bool,
    pub error: Option<String>,
}

/// Fetch the backend banner and health on mount and again whenever a
/// refresh is requested through [`crate::hooks::use_refresh`].
#[hook]
pub fn use_service_status() -> ServiceStatusHookReturn {
    let refresh_epoch = use_selector(|state: &State| state.refresh_epoch);
    let status = use_state(|| None::<ServiceStatus>);
    let is_loading = use_state(|| false);
    let error = use_state(|| None::<String>);

    let refetch = {
        let status = status.clone();
        let is_loading = is_loading.clone();
        let error = error.clone();

        use_callback((), move |_, _| {
            let status = status.clone();
            let is_loading = is_loading.clone();
            let error = error.clone();

            yew::platform::spawn_local(async move {
                is_loading.set(true);

                let api_client = get_api_client();
                let result = async {
                    let info = api_client.service_info().await?;
                    let health = api_client.health_check().await?;
                    Ok::<_, payloads::ClientError>(ServiceStatus {
                        info,
                        health,
                    })
                }
                .await;

                match result {
                    Ok(fetched) => {
                        status.set(Some(fetched));
                        error.set(None);
                    }
                    Err(e) => {
                        tracing::error!("Service status error: {e}");
                        error.set(Some(e.to_string()));
                    }
                }

                is_loading.set(false);
            });
        })
    };

    use_effect_with(*refresh_epoch, move |_| {
        refetch.emit(());
    });

    ServiceStatusHookReturn {
        status: (*status).clone(),
        is_loading: *is_loading,
        error: (*error).clone(),
    }
}
