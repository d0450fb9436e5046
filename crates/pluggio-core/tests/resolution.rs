// SPDX-FileCopyrightText: 2026 Pluggio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for URL-based resolution and the closure plugin/loader
//! adapters.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use futures::FutureExt;
use pluggio_core::{
    loader_fn, plugin_fn, BoxError, Params, Pattern, Registry, RegistryError, ResourcePlugin,
    UrlRegistry, UrlTemplate,
};

/// Plugin that records every key it is asked to build from.
fn recording_plugin(
    seen: Arc<Mutex<Vec<String>>>,
    value: &'static str,
) -> Arc<dyn ResourcePlugin<String>> {
    plugin_fn(move |key: &str, _options: &()| {
        let seen = Arc::clone(&seen);
        let key = key.to_string();
        async move {
            seen.lock().unwrap().push(key);
            Ok::<_, BoxError>(value.to_string())
        }
        .boxed()
    })
}

fn value_plugin(value: &'static str) -> Arc<dyn ResourcePlugin<String>> {
    plugin_fn(move |_key: &str, _options: &()| {
        async move { Ok::<_, BoxError>(value.to_string()) }.boxed()
    })
}

fn failing_plugin() -> Arc<dyn ResourcePlugin<String>> {
    plugin_fn(|_key: &str, _options: &()| {
        async move { Err::<String, BoxError>("build blew up".into()) }.boxed()
    })
}

/// The registry looks up by bare scheme but hands the full URL to `build`.
#[tokio::test]
async fn url_lookup_is_scheme_scoped_but_build_gets_full_url() {
    let registry: UrlRegistry<String> = Registry::url_based("Test");
    let seen = Arc::new(Mutex::new(Vec::new()));
    registry
        .load("proto", recording_plugin(Arc::clone(&seen), "resource"))
        .await
        .unwrap();

    let resource = registry.from("proto://host/path").await.unwrap();
    assert_eq!(resource, "resource");
    assert_eq!(*seen.lock().unwrap(), ["proto://host/path"]);
}

/// Malformed input fails before any lookup or loader invocation.
#[tokio::test]
async fn malformed_url_fails_before_touching_the_registry() {
    let registry = Arc::new(UrlRegistry::<String>::url_based("Test"));
    let invocations = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&invocations);
    registry
        .add_dynamic_loader(
            Pattern::Url(UrlTemplate::new()),
            loader_fn(move |_input: &str, _params: &Params| {
                let counter = Arc::clone(&counter);
                async move {
                    counter.fetch_add(1, Ordering::SeqCst);
                    Ok::<_, BoxError>(())
                }
                .boxed()
            }),
        )
        .await;

    let err = registry.from("not a url").await.unwrap_err();
    assert!(matches!(err, RegistryError::InvalidUrl { .. }));
    assert_eq!(invocations.load(Ordering::SeqCst), 0);
}

/// Named captures from the scheme template reach the dynamic loader, and
/// the loader's registration satisfies the retried direct phase.
#[tokio::test]
async fn url_scheme_named_groups_reach_the_loader() {
    let registry = Arc::new(UrlRegistry::<String>::url_based("Test"));
    let seen_params: Arc<Mutex<Option<Params>>> = Arc::new(Mutex::new(None));

    let reg = Arc::clone(&registry);
    let seen = Arc::clone(&seen_params);
    registry
        .add_dynamic_loader(
            Pattern::Url(UrlTemplate::new().scheme("sample+{encoding}")),
            loader_fn(move |input: &str, params: &Params| {
                let reg = Arc::clone(&reg);
                let seen = Arc::clone(&seen);
                let scheme = input.split(':').next().unwrap_or_default().to_string();
                let params = params.clone();
                async move {
                    *seen.lock().unwrap() = Some(params);
                    reg.load(scheme, value_plugin("gzip-storage")).await?;
                    Ok::<_, BoxError>(())
                }
                .boxed()
            }),
        )
        .await;

    let resource = registry.from("sample+gzip://bucket/object").await.unwrap();
    assert_eq!(resource, "gzip-storage");

    let params = seen_params.lock().unwrap().clone().expect("loader ran");
    assert_eq!(params.get("encoding").map(String::as_str), Some("gzip"));

    // Registration persists under the scheme key.
    assert!(registry.is_loaded("sample+gzip").await);
    assert!(registry.from("sample+gzip://other").await.is_ok());
}

/// A loader that registers a broken plugin is rolled back: the retried
/// build's failure aggregates into `PluginNotLoaded` and the registration
/// does not survive.
#[tokio::test]
async fn retried_build_failure_rolls_back_the_registration() {
    let registry = Arc::new(UrlRegistry::<String>::url_based("Test"));

    let reg = Arc::clone(&registry);
    registry
        .add_dynamic_loader(
            Pattern::Url(UrlTemplate::new().scheme("broken")),
            loader_fn(move |_input: &str, _params: &Params| {
                let reg = Arc::clone(&reg);
                async move {
                    reg.load("broken", failing_plugin()).await?;
                    Ok::<_, BoxError>(())
                }
                .boxed()
            }),
        )
        .await;

    let err = registry.from("broken://x").await.unwrap_err();
    let RegistryError::PluginNotLoaded { source: Some(aggregate), .. } = err else {
        panic!("expected PluginNotLoaded with aggregate cause");
    };
    assert!(aggregate.fallback.to_string().contains("failed to build"));
    assert!(!registry.is_loaded("broken").await);
}

/// URL patterns may constrain several segments; all captures merge into one
/// flat map for the loader.
#[tokio::test]
async fn multi_segment_captures_merge_for_the_loader() {
    let registry = Arc::new(UrlRegistry::<String>::url_based("Test"));
    let seen_params: Arc<Mutex<Option<Params>>> = Arc::new(Mutex::new(None));

    let reg = Arc::clone(&registry);
    let seen = Arc::clone(&seen_params);
    registry
        .add_dynamic_loader(
            Pattern::Url(
                UrlTemplate::new()
                    .scheme("blob")
                    .host("{bucket}.example.com")
                    .path("/assets/{name}"),
            ),
            loader_fn(move |input: &str, params: &Params| {
                let reg = Arc::clone(&reg);
                let seen = Arc::clone(&seen);
                let scheme = input.split(':').next().unwrap_or_default().to_string();
                let params = params.clone();
                async move {
                    *seen.lock().unwrap() = Some(params);
                    reg.load(scheme, value_plugin("blob-storage")).await?;
                    Ok::<_, BoxError>(())
                }
                .boxed()
            }),
        )
        .await;

    registry
        .from("blob://media.example.com/assets/logo.png")
        .await
        .unwrap();

    let params = seen_params.lock().unwrap().clone().expect("loader ran");
    assert_eq!(params.get("bucket").map(String::as_str), Some("media"));
    assert_eq!(params.get("name").map(String::as_str), Some("logo.png"));
}
