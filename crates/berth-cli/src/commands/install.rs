//! Install command - ask the release server to install a chart

use berth_client::{ClientConfig, HttpReleaseClient, ReleaseClient};
use berth_core::{InstallOptions, Release};

use crate::args::check_args_length;
use crate::display::print_release;
use crate::endpoint::{EndpointResolver, ServerEndpoint};
use crate::error::{Result, pretty_error};

/// Long help for the install command
pub const INSTALL_DESC: &str = "\
This command installs a chart archive.

The install argument must be either a relative
path to a chart directory or the name of a
chart in the current working directory.";

/// Sends install requests through a release client
pub struct InstallDispatcher<C: ReleaseClient> {
    client: C,
}

impl<C: ReleaseClient> InstallDispatcher<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Send exactly one install request
    ///
    /// Client errors are wrapped for presentation and never retried.
    pub async fn dispatch(&self, options: &InstallOptions) -> Result<Option<Release>> {
        tracing::info!(
            chart = options.chart(),
            dry_run = options.is_dry_run(),
            "requesting install"
        );

        let response = self
            .client
            .install_release(options)
            .await
            .map_err(pretty_error)?;

        if response.release.is_none() {
            tracing::warn!(chart = options.chart(), "release server returned no release");
        }

        Ok(response.release)
    }
}

/// Validate, resolve and dispatch; returns the release to render
///
/// `connect` builds the client for the resolved endpoint and is only called
/// once the arguments are valid.
pub async fn execute<C, F>(
    args: &[String],
    host: &str,
    dry_run: bool,
    resolver: &EndpointResolver,
    connect: F,
) -> Result<Option<Release>>
where
    C: ReleaseClient,
    F: FnOnce(&ServerEndpoint) -> Result<C>,
{
    let chart = check_args_length(1, args, "chart name")?;
    let options = InstallOptions::new(chart).dry_run(dry_run);

    let endpoint = resolver.resolve(host);
    tracing::debug!(endpoint = %endpoint, source = %endpoint.source(), "using release server");

    let dispatcher = InstallDispatcher::new(connect(&endpoint)?);
    dispatcher.dispatch(&options).await
}

/// Run the install command
pub async fn run(args: &[String], host: &str, dry_run: bool, verbose: bool) -> Result<()> {
    let resolver = EndpointResolver::default();

    let release = execute(args, host, dry_run, &resolver, |endpoint| {
        HttpReleaseClient::new(ClientConfig::new(endpoint.address())).map_err(pretty_error)
    })
    .await?;

    print_release(release.as_ref(), verbose)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use crate::exit_codes;
    use berth_client::{ClientError, MockReleaseClient};
    use berth_core::{ChartMetadata, ReleaseInfo, ReleaseStatus};
    use chrono::{TimeZone, Utc};

    fn resolver() -> EndpointResolver {
        EndpointResolver::new("BERTH_INSTALL_TEST_UNSET", ":44134")
    }

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    fn create_test_release(name: &str) -> Release {
        Release {
            name: name.to_string(),
            info: ReleaseInfo {
                last_deployed: Utc.with_ymd_and_hms(2016, 4, 20, 15, 4, 5).unwrap(),
                status: ReleaseStatus::Deployed,
            },
            chart: ChartMetadata {
                name: "mychart".to_string(),
                version: "1.0.0".to_string(),
            },
            manifest: "kind: Pod".to_string(),
        }
    }

    #[tokio::test]
    async fn test_dispatch_sends_one_request() {
        let client = MockReleaseClient::returning(Some(create_test_release("myapp")));
        let dispatcher = InstallDispatcher::new(client.clone());

        let options = InstallOptions::new("./mychart").dry_run(true);
        let release = dispatcher.dispatch(&options).await.unwrap();

        assert_eq!(release.unwrap().name, "myapp");
        assert_eq!(client.requests(), vec![options]);
    }

    #[tokio::test]
    async fn test_dispatch_tolerates_missing_release() {
        let dispatcher = InstallDispatcher::new(MockReleaseClient::returning(None));
        let release = dispatcher
            .dispatch(&InstallOptions::new("mychart"))
            .await
            .unwrap();
        assert!(release.is_none());
    }

    #[tokio::test]
    async fn test_dispatch_wraps_client_error() {
        let client = MockReleaseClient::failing(ClientError::Connection {
            message: "connection refused".to_string(),
        });
        let dispatcher = InstallDispatcher::new(client.clone());

        let err = dispatcher
            .dispatch(&InstallOptions::new("mychart"))
            .await
            .unwrap_err();

        assert!(matches!(err, CliError::RemoteInstall { .. }));
        assert!(err.to_string().contains("connection refused"));
        assert_eq!(err.exit_code(), exit_codes::UNAVAILABLE);
        assert_eq!(client.call_count(), 1);
    }

    #[tokio::test]
    async fn test_execute_rejects_bad_argument_count_before_connecting() {
        let client = MockReleaseClient::default();

        for bad in [args(&[]), args(&["a", "b"])] {
            let mut connected = false;
            let err = execute(&bad, "", false, &resolver(), |_| {
                connected = true;
                Ok(client.clone())
            })
            .await
            .unwrap_err();

            assert!(matches!(err, CliError::InvalidArgumentCount { .. }));
            assert!(!connected);
        }

        assert_eq!(client.call_count(), 0);
    }

    #[tokio::test]
    async fn test_execute_passes_resolved_endpoint_and_options() {
        let client = MockReleaseClient::returning(Some(create_test_release("myapp")));

        let mut seen = None;
        let release = execute(&args(&["mychart"]), "berth-server:1234", true, &resolver(), |endpoint| {
            seen = Some(endpoint.address().to_string());
            Ok(client.clone())
        })
        .await
        .unwrap();

        assert_eq!(release.unwrap().name, "myapp");
        assert_eq!(seen.as_deref(), Some("berth-server:1234"));
        assert_eq!(
            client.requests(),
            vec![InstallOptions::new("mychart").dry_run(true)]
        );
    }

    #[tokio::test]
    async fn test_execute_uses_default_endpoint() {
        let mut seen = None;
        execute(&args(&["mychart"]), "", false, &resolver(), |endpoint| {
            seen = Some(endpoint.clone());
            Ok(MockReleaseClient::default())
        })
        .await
        .unwrap();

        assert_eq!(seen.unwrap().address(), ":44134");
    }

    #[tokio::test]
    async fn test_execute_surfaces_dispatch_failure() {
        let client = MockReleaseClient::failing(ClientError::Connection {
            message: "connection refused".to_string(),
        });

        let result = execute(&args(&["mychart"]), "", false, &resolver(), |_| Ok(client.clone())).await;

        assert!(matches!(result, Err(CliError::RemoteInstall { .. })));
    }
}
