use super::*;
use client::routes::{GRADE_PARAM, View};

fn config(site_root: Option<&str>) -> ServerConfig {
    ServerConfig { port: 3000, site_root: site_root.map(PathBuf::from) }
}

#[tokio::test]
async fn healthz_is_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[test]
fn asset_root_defaults_to_leptos_site_root() {
    assert_eq!(asset_root(&config(None), "target/site"), PathBuf::from("target/site"));
}

#[test]
fn asset_root_prefers_override() {
    assert_eq!(asset_root(&config(Some("/srv/chaski")), "target/site"), PathBuf::from("/srv/chaski"));
}

#[test]
fn pkg_dir_is_under_site_root() {
    assert_eq!(pkg_dir(Path::new("/srv/chaski")), PathBuf::from("/srv/chaski/pkg"));
}

#[test]
fn leptos_route_table_matches_client_views() {
    let placeholder = format!("{{{GRADE_PARAM}}}");
    let mut registered: Vec<String> = generate_route_list(client::app::App)
        .iter()
        .map(|listing| listing.path().to_owned())
        .collect();
    registered.sort();

    let mut expected: Vec<String> = [
        View::Home,
        View::GradeSelection,
        View::LoginRegister(placeholder.clone()),
        View::Dashboard,
    ]
    .iter()
    .map(View::path)
    .collect();
    expected.sort();
    assert_eq!(registered, expected);

    for path in &registered {
        let concrete = path.replace(&placeholder, "3-egb");
        let view = View::from_path(&concrete);
        assert_ne!(view, View::RedirectHome, "{path} is registered but maps to no view");
        assert_eq!(view.path(), concrete);
    }
}
