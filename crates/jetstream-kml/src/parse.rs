//! Reader for flight track KML exports.
//!
//! The document carries two folders: `Route`, one timestamped `Point` placemark per recorded
//! position, and `Trail`, one two-point `LineString` per forward-flight leg.

use crate::error::{KmlError, Result};
use chrono::{DateTime, NaiveDateTime, Utc};
use jetstream_core::{RoutePoint, TrackPoint, TrailSegment};
use roxmltree::{Document, Node};

#[derive(Debug, Clone)]
pub struct FlightTrack {
    /// `Document/name`, usually the flight number.
    pub name: Option<String>,
    pub route: Vec<RoutePoint>,
    pub trail: Vec<TrailSegment>,
}

pub fn parse_flight(xml: &str) -> Result<FlightTrack> {
    let doc = Document::parse(xml)?;
    let document = doc
        .descendants()
        .find(|n| n.has_tag_name("Document"))
        .ok_or_else(|| KmlError::MissingElement("Document".to_string()))?;

    let name = get_child_text(document, "name").map(|s| s.trim().to_string());

    let route = get_folder(document, "Route")?
        .children()
        .filter(|n| n.has_tag_name("Placemark"))
        .map(get_route_point)
        .collect::<Result<Vec<_>>>()?;

    let trail = get_folder(document, "Trail")?
        .children()
        .filter(|n| n.has_tag_name("Placemark"))
        .filter_map(|pm| get_path(pm, &["MultiGeometry", "LineString", "coordinates"]))
        .enumerate()
        .map(|(index, coords)| get_segment(index, coords))
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!(
        route_points = route.len(),
        trail_segments = trail.len(),
        "parsed flight track"
    );

    Ok(FlightTrack { name, route, trail })
}

fn get_child<'a, 'd>(node: Node<'a, 'd>, tag: &str) -> Option<Node<'a, 'd>> {
    node.children().find(|c| c.has_tag_name(tag))
}

fn get_child_text<'a>(node: Node<'a, '_>, tag: &str) -> Option<&'a str> {
    get_child(node, tag)?.text()
}

fn get_path<'a, 'd>(node: Node<'a, 'd>, tags: &[&str]) -> Option<Node<'a, 'd>> {
    tags.iter().try_fold(node, |n, tag| get_child(n, tag))
}

fn get_folder<'a, 'd>(document: Node<'a, 'd>, name: &str) -> Result<Node<'a, 'd>> {
    document
        .children()
        .filter(|n| n.has_tag_name("Folder"))
        .find(|f| get_child_text(*f, "name").map(str::trim) == Some(name))
        .ok_or_else(|| KmlError::MissingElement(format!("Folder '{name}'")))
}

fn get_route_point(placemark: Node) -> Result<RoutePoint> {
    let coords = get_path(placemark, &["Point", "coordinates"])
        .and_then(|n| n.text())
        .ok_or_else(|| KmlError::MissingElement("Placemark/Point/coordinates".to_string()))?;
    let when = get_path(placemark, &["TimeStamp", "when"])
        .and_then(|n| n.text())
        .ok_or_else(|| KmlError::MissingElement("Placemark/TimeStamp/when".to_string()))?;

    Ok(RoutePoint {
        timestamp: parse_timestamp(when)?,
        point: parse_coordinate(coords)?,
    })
}

fn get_segment(index: usize, coords: Node) -> Result<TrailSegment> {
    let points = coords
        .text()
        .unwrap_or_default()
        .split_whitespace()
        .map(parse_coordinate)
        .collect::<Result<Vec<_>>>()?;

    match points[..] {
        [start, end] => Ok(TrailSegment::new(start, end)),
        _ => Err(KmlError::SegmentPoints {
            index,
            found: points.len(),
        }),
    }
}

/// `lon,lat[,alt]` with altitude defaulting to the ground.
pub fn parse_coordinate(text: &str) -> Result<TrackPoint> {
    let bad = || KmlError::Coordinates(text.trim().to_string());
    let values = text
        .trim()
        .split(',')
        .map(|s| s.trim().parse::<f64>().map_err(|_| bad()))
        .collect::<Result<Vec<_>>>()?;

    match values[..] {
        [lon, lat] => Ok(TrackPoint::new(lon, lat, 0.0)),
        [lon, lat, alt] => Ok(TrackPoint::new(lon, lat, alt)),
        _ => Err(bad()),
    }
}

/// RFC 3339, or a bare ISO 8601 date-time taken as UTC.
pub fn parse_timestamp(text: &str) -> Result<DateTime<Utc>> {
    let text = text.trim();
    DateTime::parse_from_rfc3339(text)
        .map(|t| t.with_timezone(&Utc))
        .or_else(|_| {
            NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f").map(|t| t.and_utc())
        })
        .map_err(|source| KmlError::Timestamp {
            text: text.to_string(),
            source,
        })
}
