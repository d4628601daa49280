//! The Logistics heuristic: an admissible-leaning lower bound on the remaining cost-to-go.
//!
//! Three additive terms: mandatory handling costs, a per-city ride-graph loop count, and an
//! inter-city flight-graph loop count. The graph terms are the non-trivial algorithmic content —
//! they count the minimum number of vehicle segments needed to cover the required
//! origin -> destination transport graph, which is the number of distinct destinations plus the
//! number of cycle re-entries agents cannot absorb by already starting there.

use std::collections::BTreeSet;

use crate::domain::{DROP_OFF_COST, DRIVE_COST, FLY_COST, LOAD_UNLOAD_COST, PICK_UP_COST, Package, PackageState, Vehicle};
use crate::graph::OrientedGraph;
use crate::setting::Setting;

pub fn heuristic(setting: &Setting, trucks: &[Vehicle], airplanes: &[Vehicle], packages: &[Package]) -> u64 {
    handling_costs(setting, packages)
        + DRIVE_COST * ride_count(setting, trucks, packages)
        + FLY_COST * flight_count(setting, airplanes, packages)
}

fn handling_costs(setting: &Setting, packages: &[Package]) -> u64 {
    let mut cost = 0;

    for package in packages {
        let same_city = setting.place_city(package.position) == setting.place_city(package.destination);

        if same_city {
            if package.state == PackageState::InPlane {
                cost += DROP_OFF_COST;
            }
            if package.position != package.destination {
                if package.state != PackageState::InTruck {
                    cost += LOAD_UNLOAD_COST;
                }
                cost += LOAD_UNLOAD_COST;
            } else if package.state == PackageState::InTruck {
                cost += LOAD_UNLOAD_COST;
            }
        } else {
            let src_airport = setting.airport(setting.place_city(package.position));
            let dst_airport = setting.airport(setting.place_city(package.destination));

            if package.position != src_airport {
                if package.state == PackageState::Out {
                    cost += LOAD_UNLOAD_COST;
                }
                cost += LOAD_UNLOAD_COST;
            }
            if package.destination != dst_airport {
                cost += 2 * LOAD_UNLOAD_COST;
            }

            if package.position == src_airport && package.state == PackageState::InTruck {
                cost += LOAD_UNLOAD_COST + PICK_UP_COST;
            } else {
                cost += PICK_UP_COST;
            }

            cost += DROP_OFF_COST;
        }
    }

    cost
}

/// Places holding at least one truck and at least one package — agents that can absorb a cycle
/// in the ride graph by already standing on it.
fn occupied_places(trucks: &[Vehicle], packages: &[Package]) -> BTreeSet<usize> {
    let truck_places: BTreeSet<usize> = trucks.iter().map(|t| t.position).collect();
    let package_places: BTreeSet<usize> = packages.iter().map(|p| p.position).collect();
    truck_places.intersection(&package_places).copied().collect()
}

fn ride_count(setting: &Setting, trucks: &[Vehicle], packages: &[Package]) -> u64 {
    let occupied = occupied_places(trucks, packages);
    let mut total = 0u64;

    for city in 0..setting.city_count() {
        let mut graph = OrientedGraph::new(setting.place_count());
        let mut destinations: BTreeSet<usize> = BTreeSet::new();

        for package in packages {
            let pos_city = setting.place_city(package.position);
            let dest_city = setting.place_city(package.destination);

            if pos_city == dest_city {
                if pos_city == city && package.position != package.destination {
                    graph.add_edge(package.position, package.destination);
                    destinations.insert(package.destination);
                }
            } else {
                let src_airport = setting.airport(pos_city);
                let dst_airport = setting.airport(dest_city);

                if pos_city == city && package.position != src_airport {
                    graph.add_edge(package.position, src_airport);
                    destinations.insert(src_airport);
                }
                if dest_city == city && package.destination != dst_airport {
                    graph.add_edge(dst_airport, package.destination);
                    destinations.insert(package.destination);
                }
            }
        }

        total += destinations.len() as u64 + graph.loop_count(&occupied) as u64;
    }

    total
}

fn flight_count(setting: &Setting, airplanes: &[Vehicle], packages: &[Package]) -> u64 {
    let mut graph = OrientedGraph::new(setting.city_count());
    let mut destinations: BTreeSet<usize> = BTreeSet::new();
    let mut leaving_cities: BTreeSet<usize> = BTreeSet::new();

    for package in packages {
        let pos_city = setting.place_city(package.position);
        let dest_city = setting.place_city(package.destination);
        if pos_city != dest_city {
            graph.add_edge(pos_city, dest_city);
            destinations.insert(dest_city);
            leaving_cities.insert(pos_city);
        }
    }

    let airplane_cities: BTreeSet<usize> = airplanes.iter().map(|a| setting.place_city(a.position)).collect();
    let occupied: BTreeSet<usize> = airplane_cities.intersection(&leaving_cities).copied().collect();

    destinations.len() as u64 + graph.loop_count(&occupied) as u64
}
