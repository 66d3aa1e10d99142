//! KML rendering of a wind-annotated trail.

use crate::colormap::ColorMap;
use jetstream_core::azimuth::chart_longitude;
use jetstream_core::{SegmentAnnotation, SpeedUnit, TrackPoint, WindImpactReport};
use quick_xml::escape::escape;

static KML_NAMESPACES: &str = r#"xmlns="http://www.opengis.net/kml/2.2" xmlns:gx="http://www.google.com/kml/ext/2.2" xmlns:kml="http://www.opengis.net/kml/2.2" xmlns:atom="http://www.w3.org/2005/Atom""#;

#[derive(Debug, Clone)]
pub struct AnalysisOptions {
    /// Document title, e.g. flight number, date and actual flight time.
    pub title: String,
    pub units: SpeedUnit,
    pub colors: ColorMap,
}

impl AnalysisOptions {
    pub fn new(title: impl Into<String>, units: SpeedUnit) -> Self {
        Self {
            title: title.into(),
            units,
            colors: ColorMap::headwind(),
        }
    }
}

/// `H:MM:SS` with a day prefix past 24 hours, rounded to the nearest second.
pub fn format_hms(seconds: f64) -> String {
    let total = seconds.round().max(0.0) as u64;
    let (days, rem) = (total / 86_400, total % 86_400);
    let hms = format!("{}:{:02}:{:02}", rem / 3600, (rem % 3600) / 60, rem % 60);
    match days {
        0 => hms,
        1 => format!("1 day, {hms}"),
        n => format!("{n} days, {hms}"),
    }
}

/// Full KML document: plane styles, one placemark per airborne segment and the flown path.
pub fn write_flight_analysis(report: &WindImpactReport, options: &AnalysisOptions) -> String {
    let mut kml = document_header(&options.title, "plane", "plane.png", Some(2.0));

    kml += "\n\t<Folder>\n\t\t<name>Points</name>\n\t\t<open>0</open>";
    for annotation in &report.annotations {
        kml += &segment_placemark(annotation, options);
    }
    kml += "\n\t</Folder>";

    kml += &path_placemark(&report.path, report.total_duration_s);
    kml += &document_footer();
    kml
}

fn segment_placemark(a: &SegmentAnnotation, options: &AnalysisOptions) -> String {
    let units = options.units;
    let name = format!("{:.2} {}", units.from_mps(a.headwind_mps), units.label());
    let description = format!(
        "Wind: {:.2} {unit} at {:.0}°\nPlane: {:.2} {unit} at {:.0}°",
        units.from_mps(a.wind.magnitude_mps),
        a.wind.azimuth_deg,
        units.from_mps(a.ground_speed_mps),
        a.ground_azimuth_deg,
        unit = units.label(),
    );

    format!(
        r#"
	<Placemark>
		<name>{name}</name>
		<description>{description}</description>
		<styleUrl>#m_plane</styleUrl>
		<Style>
			<IconStyle>
				<heading>{heading:.0}</heading>
				<color>{color}</color>
			</IconStyle>
		</Style>
		<Point>
			<altitudeMode>absolute</altitudeMode>
			<coordinates>{coords}</coordinates>
		</Point>
	</Placemark>"#,
        name = escape(&name),
        description = escape(&description),
        heading = a.ground_azimuth_deg,
        color = options.colors.headwind_color(a.headwind_mps),
        coords = coordinate(&a.start, 6),
    )
}

fn path_placemark(path: &[TrackPoint], total_duration_s: f64) -> String {
    let coords = path
        .iter()
        .map(|p| coordinate(p, 6))
        .collect::<Vec<_>>()
        .join(" ");

    format!(
        r#"
	<Placemark>
		<name>Predicted Flight Time: {}</name>
		<visibility>1</visibility>
		<LineString>
			<tessellate>1</tessellate>
			<altitudeMode>absolute</altitudeMode>
			<coordinates>
				{coords}
			</coordinates>
		</LineString>
	</Placemark>"#,
        format_hms(total_duration_s)
    )
}

/// `lon,lat,alt` with the longitude in chart convention.
fn coordinate(p: &TrackPoint, precision: usize) -> String {
    format!(
        "{:.*},{:.*},{}",
        precision,
        chart_longitude(p.lon),
        precision,
        p.lat,
        p.altitude_m
    )
}

/// Document opening with a normal/highlight style pair named `s_{style}` / `s_{style}_hl`.
pub(crate) fn document_header(
    title: &str,
    style: &str,
    icon: &str,
    highlight_label_scale: Option<f64>,
) -> String {
    let highlight_label = highlight_label_scale
        .map(|scale| format!("\n\t\t\t<LabelStyle>\n\t\t\t\t<scale>{scale:.1}</scale>\n\t\t\t</LabelStyle>"))
        .unwrap_or_default();

    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<kml {namespaces}>
<Document>
	<name>{title}</name>
	<open>1</open>
	<StyleMap id="m_{style}">
		<Pair>
			<key>normal</key>
			<styleUrl>#s_{style}</styleUrl>
		</Pair>
		<Pair>
			<key>highlight</key>
			<styleUrl>#s_{style}_hl</styleUrl>
		</Pair>
	</StyleMap>
	<Style id="s_{style}">
		<IconStyle>
			<scale>1.2</scale>
			<Icon>
				<href>{icon}</href>
			</Icon>
		</IconStyle>
		<LabelStyle>
			<scale>0</scale>
		</LabelStyle>
	</Style>
	<Style id="s_{style}_hl">
		<IconStyle>
			<scale>1.2</scale>
			<Icon>
				<href>{icon}</href>
			</Icon>
		</IconStyle>{highlight_label}
	</Style>"#,
        namespaces = KML_NAMESPACES,
        title = escape(title),
    )
}

pub(crate) fn document_footer() -> String {
    "\n</Document>\n</kml>\n".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_coordinate;
    use jetstream_core::WindSample;

    fn annotation(lon: f64, headwind_mps: f64) -> SegmentAnnotation {
        SegmentAnnotation {
            index: 0,
            start: TrackPoint::new(lon, -33.5, 3000.0),
            headwind_mps,
            ground_azimuth_deg: 227.4,
            wind: WindSample {
                magnitude_mps: 20.0,
                azimuth_deg: 90.0,
            },
            ground_speed_mps: 250.0 + headwind_mps,
            distance_m: 10_000.0,
            duration_s: 10_000.0 / (250.0 + headwind_mps),
        }
    }

    #[test]
    fn formats_durations_like_a_timedelta() {
        assert_eq!(format_hms(0.0), "0:00:00");
        assert_eq!(format_hms(3725.4), "1:02:05");
        assert_eq!(format_hms(86_400.0 + 61.0), "1 day, 0:01:01");
        assert_eq!(format_hms(2.0 * 86_400.0), "2 days, 0:00:00");
    }

    #[test]
    fn document_is_well_formed_and_annotated() {
        let report = WindImpactReport {
            annotations: vec![annotation(200.0, -12.346)],
            skipped: Vec::new(),
            path: vec![TrackPoint::new(151.18, -33.95, 0.0), TrackPoint::new(200.0, -33.5, 3000.0)],
            total_duration_s: 3725.0,
        };
        let options = AnalysisOptions::new("QF1 - 2023-01-13 & co", SpeedUnit::Mps);
        let kml = write_flight_analysis(&report, &options);

        let doc = roxmltree::Document::parse(&kml).unwrap();
        let names: Vec<_> = doc
            .descendants()
            .filter(|n| n.has_tag_name("name"))
            .filter_map(|n| n.text())
            .collect();
        assert!(names.contains(&"QF1 - 2023-01-13 & co"));
        assert!(names.contains(&"-12.35 m/s"));
        assert!(names.contains(&"Predicted Flight Time: 1:02:05"));

        let coords = doc
            .descendants()
            .find(|n| n.has_tag_name("Point"))
            .and_then(|n| n.children().find(|c| c.has_tag_name("coordinates")))
            .and_then(|n| n.text())
            .unwrap();
        let point = parse_coordinate(coords).unwrap();
        assert!((point.lon - -160.0).abs() < 1e-9);

        assert!(kml.contains("<heading>227</heading>"));
    }

    #[test]
    fn converts_speed_units_in_labels() {
        let report = WindImpactReport {
            annotations: vec![annotation(10.0, 10.0)],
            ..WindImpactReport::default()
        };
        let kml = write_flight_analysis(&report, &AnalysisOptions::new("t", SpeedUnit::Kmh));
        assert!(kml.contains("<name>36.00 kmh</name>"));
        assert!(kml.contains("Plane: 936.00 kmh at 227°"));
    }
}
