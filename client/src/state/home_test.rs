use super::*;

fn healthy() -> Result<HealthResponse, ApiError> {
    Ok(HealthResponse { status: "OK".to_owned() })
}

fn levels(count: Option<u64>, names: &[&str]) -> Result<LevelCatalogResponse, ApiError> {
    let rows = names
        .iter()
        .map(|name| serde_json::from_value(serde_json::json!({ "nombre": name })).unwrap())
        .collect();
    Ok(LevelCatalogResponse { levels: rows, count })
}

fn institutions(count: u64) -> Result<InstitutionCatalogResponse, ApiError> {
    Ok(InstitutionCatalogResponse { count: Some(count) })
}

// =============================================================
// ApiStatus
// =============================================================

#[test]
fn api_status_defaults_to_loading() {
    assert_eq!(ApiStatus::default(), ApiStatus::Loading);
    assert_eq!(ApiStatus::Loading.label(), "Loading...");
}

#[test]
fn api_status_from_health() {
    assert_eq!(ApiStatus::from_health("OK"), ApiStatus::Ok);
    assert_eq!(ApiStatus::from_health("ok "), ApiStatus::Ok);
    assert_eq!(ApiStatus::from_health("degraded"), ApiStatus::Error);
    assert_eq!(ApiStatus::from_health(""), ApiStatus::Error);
}

#[test]
fn api_status_indicators() {
    assert_eq!(ApiStatus::Ok.indicator(), "✅");
    assert_eq!(ApiStatus::Error.indicator(), "❌");
    assert_eq!(ApiStatus::Error.label(), "ERROR");
}

// =============================================================
// HomeState derivation
// =============================================================

#[test]
fn default_home_state_is_loading() {
    let state = HomeState::default();
    assert!(state.is_loading());
    assert!(state.error.is_none());
}

#[test]
fn successful_reads_populate_stats() {
    let state = HomeState::from_responses(
        healthy(),
        levels(Some(4), &["Exploradores", "Constructores", "Inventores", "Ingenieros"]),
        institutions(7),
    );
    assert_eq!(
        state.stats,
        PlatformStats { level_count: 4, institution_count: 7, course_count: 12, api_status: ApiStatus::Ok }
    );
    assert_eq!(state.levels.len(), 4);
    assert!(state.error.is_none());
    assert!(!state.is_loading());
}

#[test]
fn counts_sent_as_strings_still_populate_stats() {
    let levels: LevelCatalogResponse = serde_json::from_value(serde_json::json!({
        "niveles": [{ "nombre": "Exploradores" }, { "descripcion": "sin nombre" }],
        "count": "4"
    }))
    .unwrap();
    let institutions: InstitutionCatalogResponse = serde_json::from_value(serde_json::json!({ "count": "2" })).unwrap();
    let state = HomeState::from_responses(healthy(), Ok(levels), Ok(institutions));
    assert_eq!(
        state.stats,
        PlatformStats { level_count: 4, institution_count: 2, course_count: 12, api_status: ApiStatus::Ok }
    );
    assert_eq!(state.levels.len(), 1);
    assert!(state.error.is_none());
}

#[test]
fn course_count_follows_level_count() {
    let state = HomeState::from_responses(healthy(), levels(None, &["A", "B"]), institutions(0));
    assert_eq!(state.stats.level_count, 2);
    assert_eq!(state.stats.course_count, 2 * COURSES_PER_LEVEL);
}

#[test]
fn unhealthy_status_is_error_without_banner() {
    let state = HomeState::from_responses(
        Ok(HealthResponse { status: "DOWN".to_owned() }),
        levels(Some(4), &[]),
        institutions(1),
    );
    assert_eq!(state.stats.api_status, ApiStatus::Error);
    assert_eq!(state.stats.level_count, 4);
    assert!(state.error.is_none());
}

#[test]
fn backend_failure_sets_error_status_and_banner() {
    let state = HomeState::from_responses(Err(ApiError::Connectivity), levels(Some(4), &["A"]), institutions(2));
    assert_eq!(state.stats.api_status, ApiStatus::Error);
    assert_eq!(state.stats.level_count, 0);
    assert_eq!(state.stats.institution_count, 0);
    assert_eq!(state.stats.course_count, 0);
    assert!(state.levels.is_empty());
    assert_eq!(state.error.as_deref(), Some(HOME_ERROR_MESSAGE));
}

#[test]
fn any_single_failure_fails_the_whole_strip() {
    let failed_levels = HomeState::from_responses(healthy(), Err(ApiError::Connectivity), institutions(2));
    let failed_institutions =
        HomeState::from_responses(healthy(), levels(Some(4), &[]), Err(ApiError::Validation("x".to_owned())));
    assert_eq!(failed_levels, HomeState::failed());
    assert_eq!(failed_institutions, HomeState::failed());
}

#[test]
fn failed_state_renders_failure_indicator() {
    let state = HomeState::from_responses(Err(ApiError::Connectivity), Err(ApiError::Connectivity), Err(ApiError::Connectivity));
    assert_eq!(state.stats.api_status.indicator(), "❌");
    assert_eq!(state.stats.api_status.label(), "ERROR");
}
