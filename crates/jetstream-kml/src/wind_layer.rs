//! Whole-grid wind layer split into regions and packaged as KMZ.
//!
//! Google Earth only loads a region's child document once the view overlaps it, which keeps a
//! 65,000-placemark grid usable.

use crate::colormap::ColorMap;
use crate::error::Result;
use crate::write::{document_footer, document_header};
use jetstream_core::azimuth::chart_longitude;
use jetstream_core::{GridSample, SpeedUnit, WindGrid};
use quick_xml::escape::escape;
use std::io::{Seek, Write};
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

pub const ARROW_ICON_PATH: &str = "files/windarrow.png";

/// Latitude/longitude box in grid convention. Lower bounds inclusive, upper bounds exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub min_lat: i32,
    pub max_lat: i32,
    pub min_lon: i32,
    pub max_lon: i32,
}

impl Region {
    const fn new(min_lat: i32, max_lat: i32, min_lon: i32, max_lon: i32) -> Self {
        Self {
            min_lat,
            max_lat,
            min_lon,
            max_lon,
        }
    }

    pub fn contains(&self, lat: i32, lon: i32) -> bool {
        (self.min_lat..self.max_lat).contains(&lat) && (self.min_lon..self.max_lon).contains(&lon)
    }
}

/// Polar caps as single regions, everything else in 30° bands split into quadrants.
pub fn regions() -> Vec<Region> {
    let mut regions = vec![Region::new(-90, -75, 0, 360)];
    for min_lat in (-75..75).step_by(30) {
        for min_lon in (0..360).step_by(90) {
            regions.push(Region::new(min_lat, min_lat + 30, min_lon, min_lon + 90));
        }
    }
    regions.push(Region::new(75, 90, 0, 360));
    regions
}

/// Region holding a grid cell. The north pole row joins the northern cap.
fn region_index(regions: &[Region], lat: i32, lon: i32) -> Option<usize> {
    let lat = lat.min(89);
    let lon = lon.rem_euclid(360);
    regions.iter().position(|r| r.contains(lat, lon))
}

/// Rendered documents ready for packaging.
#[derive(Debug, Clone)]
pub struct WindLayer {
    /// Master `doc.kml` with one network link per region.
    pub doc: String,
    /// `(archive path, contents)` for each region's child document.
    pub children: Vec<(String, String)>,
}

pub fn build_wind_layer(grid: &WindGrid, title: &str, units: SpeedUnit) -> WindLayer {
    let regions = regions();
    let colors = ColorMap::wind_speed();
    let mut placemarks = vec![String::new(); regions.len()];

    for sample in grid.samples() {
        match region_index(&regions, sample.lat, sample.lon) {
            Some(i) => placemarks[i] += &arrow_placemark(sample, units, &colors),
            None => tracing::warn!(lat = sample.lat, lon = sample.lon, "sample outside every region"),
        }
    }

    let mut doc = document_header(title, "arrow", ARROW_ICON_PATH, None);
    let mut children = Vec::with_capacity(regions.len());

    for (idx, (region, body)) in regions.iter().zip(placemarks).enumerate() {
        let link_name = format!("link{idx:02}.kml");
        doc += &network_link(region, &link_name);

        // Children live next to the icon inside files/
        let mut child = document_header(&idx.to_string(), "arrow", "windarrow.png", None);
        child += &body;
        child += &document_footer();
        children.push((format!("files/{link_name}"), child));
    }
    doc += &document_footer();

    WindLayer { doc, children }
}

fn network_link(region: &Region, link_name: &str) -> String {
    format!(
        r#"
	<NetworkLink>
		<name>{link_name}</name>
		<Region>
			<LatLonAltBox>
				<north>{north}</north>
				<south>{south}</south>
				<east>{east}</east>
				<west>{west}</west>
			</LatLonAltBox>
		</Region>
		<Link>
			<href>files/{link_name}</href>
			<viewRefreshMode>onRegion</viewRefreshMode>
		</Link>
	</NetworkLink>"#,
        north = region.max_lat,
        south = region.min_lat,
        east = region.max_lon,
        west = region.min_lon,
    )
}

fn arrow_placemark(sample: &GridSample, units: SpeedUnit, colors: &ColorMap) -> String {
    let wind = sample.wind();
    let name = format!(
        "{:.2} {} at {:.0}°",
        units.from_mps(wind.magnitude_mps),
        units.label(),
        wind.azimuth_deg
    );

    format!(
        r#"
	<Placemark>
		<name>{name}</name>
		<styleUrl>#m_arrow</styleUrl>
		<Style>
			<IconStyle>
				<heading>{heading:.0}</heading>
				<color>{color}</color>
			</IconStyle>
		</Style>
		<Point>
			<coordinates>{lon:.0},{lat},0</coordinates>
		</Point>
	</Placemark>"#,
        name = escape(&name),
        heading = wind.azimuth_deg,
        color = colors.wind_speed_color(wind.magnitude_mps),
        lon = chart_longitude(f64::from(sample.lon)),
        lat = sample.lat,
    )
}

/// Write `layer` as a KMZ archive, with the arrow icon when one is supplied.
pub fn write_kmz<W: Write + Seek>(layer: &WindLayer, icon: Option<&[u8]>, writer: W) -> Result<W> {
    let mut zip = ZipWriter::new(writer);
    let options = FileOptions::default().compression_method(CompressionMethod::Deflated);

    zip.start_file("doc.kml", options)?;
    zip.write_all(layer.doc.as_bytes())?;

    if let Some(icon) = icon {
        zip.start_file(ARROW_ICON_PATH, options)?;
        zip.write_all(icon)?;
    }

    for (path, contents) in &layer.children {
        zip.start_file(path.as_str(), options)?;
        zip.write_all(contents.as_bytes())?;
    }

    Ok(zip.finish()?)
}
