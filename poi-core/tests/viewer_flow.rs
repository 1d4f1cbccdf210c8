use poi_core::{
    FetchError, HeaderMode, LOAD_FAILED_MESSAGE, LoadError, MapConfig, PanelContent, PanelState,
    Viewer,
};

const MARKERS: &str = "latitude,longitude,title,description\n\
46.2,6.15,\"Lausanne\",\"Capital of Vaud\"\n\
46.46,6.84,Vevey,Home of the fork\n\
\n\
forty-six,6.9,Broken,row\n\
46.43,6.91,Montreux,<b>Jazz</b> & lake\n\
45.0,6.5,Outside,south of the bounds\n";

#[test]
fn scenario_full_load_with_one_bad_row() {
    let mut viewer = Viewer::default();
    let report = viewer.load(Ok(MARKERS.to_string()));

    assert_eq!(report.loaded, 4);
    assert_eq!(report.failed_rows, 1);
    assert_eq!(report.out_of_bounds, 1);
    assert!(report.error.is_none());
    assert_eq!(viewer.registry().len(), 4);
    assert_eq!(viewer.panel().state(), PanelState::Closed);

    let extent = report.extent.unwrap();
    assert_eq!((extent.min().y, extent.max().y), (45.0, 46.46));
    assert_eq!((extent.min().x, extent.max().x), (6.15, 6.91));

    let first = viewer.registry().get(0).unwrap();
    assert_eq!(first.lat_lng(), [46.2, 6.15]);
    assert_eq!(first.title, "Lausanne");
    assert_eq!(first.description, "Capital of Vaud");
}

#[test]
fn scenario_http_404_opens_panel_with_error() {
    let mut viewer = Viewer::default();
    let report = viewer.load(Err(FetchError::Status(404).into()));

    assert_eq!(report.loaded, 0);
    assert!(report.extent.is_none());
    assert_eq!(
        report.error,
        Some(LoadError::Fetch(FetchError::Status(404)))
    );
    assert!(viewer.registry().is_empty());
    assert!(viewer.panel().is_open());
    assert_eq!(
        viewer.panel().content(),
        Some(&PanelContent::error(LOAD_FAILED_MESSAGE))
    );
    assert!(viewer.panel().html().contains("could not load"));
    assert_eq!(viewer.last_report(), Some(&report));
}

#[test]
fn scenario_timeout_is_a_load_failure() {
    let mut viewer = Viewer::default();
    let report = viewer.load(Err(FetchError::Timeout(10_000).into()));
    assert!(report.error.is_some());
    assert!(viewer.panel().is_open());
}

#[test]
fn scenario_marker_click_shows_title_and_description() {
    let mut viewer = Viewer::default();
    viewer.load(Ok(MARKERS.to_string()));

    let title = viewer.select(1).map(|r| r.title.clone());
    assert_eq!(title.as_deref(), Some("Vevey"));
    assert!(viewer.panel().is_open());
    let html = viewer.panel().html();
    assert!(html.contains("Vevey"));
    assert!(html.contains("Home of the fork"));

    // markup in the CSV is shown as text
    viewer.select(2);
    assert_eq!(
        viewer.panel().html(),
        "<h2>Montreux</h2><p>&lt;b&gt;Jazz&lt;/b&gt; &amp; lake</p>"
    );

    assert!(viewer.select(99).is_none());
}

#[test]
fn buttons_toggle_without_touching_content() {
    let mut viewer = Viewer::default();
    viewer.load(Ok(MARKERS.to_string()));
    viewer.select(0);
    let html = viewer.panel().html();

    viewer.close_panel();
    assert_eq!(viewer.panel().state(), PanelState::Closed);
    viewer.open_panel();
    viewer.open_panel();
    assert!(viewer.panel().is_open());
    assert_eq!(viewer.panel().html(), html);
}

#[test]
fn strict_header_rejects_headerless_file() {
    let config = MapConfig {
        header: HeaderMode::Validate,
        ..MapConfig::default()
    };
    let mut viewer = Viewer::new(config);
    let report = viewer.load(Ok("46.5,6.6,Ouchy,port\n".to_string()));
    assert!(matches!(report.error, Some(LoadError::Ingest(_))));
    assert!(viewer.registry().is_empty());
    assert!(viewer.panel().is_open());
}
