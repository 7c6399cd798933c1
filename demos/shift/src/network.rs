//! Built-in sample district used when no point file is given.
//!
//! Eight collection points around a depot.  Point 0 is the landfill and
//! point 5 hosts the animal shelter.

use wc_core::PointId;
use wc_graph::{CollectionGraph, GraphBuilder, GraphResult};

/// Build the sample district.
///
/// Returns `(graph, landfill, shelter)`.
pub fn build_sample() -> GraphResult<(CollectionGraph, PointId, PointId)> {
    let mut b = GraphBuilder::with_capacity(8, 11);

    let landfill    = b.add_point(0.0);
    let market      = b.add_point(14.5);
    let school      = b.add_point(6.0);
    let old_town    = b.add_point(11.25);
    let harbour     = b.add_point(9.0);
    let shelter     = b.add_point(2.5);
    let estate      = b.add_point(7.75);
    let ring_road   = b.add_point(4.0);

    // Travel minutes.
    b.add_road(landfill,  ring_road, 6);
    b.add_road(landfill,  harbour,   12);
    b.add_road(ring_road, market,    4);
    b.add_road(ring_road, estate,    5);
    b.add_road(market,    old_town,  3);
    b.add_road(market,    school,    4);
    b.add_road(old_town,  school,    2);
    b.add_road(old_town,  harbour,   7);
    b.add_road(school,    shelter,   6);
    b.add_road(estate,    shelter,   3);
    b.add_road(harbour,   shelter,   9);

    Ok((b.build()?, landfill, shelter))
}
