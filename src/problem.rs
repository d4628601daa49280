//! The `Problem` capability trait and its logistics implementation — component D.
//!
//! Reframes the source's virtual `IProblem`/`IState` base classes as a trait: any problem exposes
//! an initial state, a goal predicate, a heuristic, and a successor enumerator, which is exactly
//! what the search engine (component E) needs and nothing more.

use crate::domain::{Action, Configuration, PLANE_CAPACITY, PackageState, TRUCK_CAPACITY};
use crate::setting::Setting;

pub trait Problem {
    type State: Clone;
    type Action: Clone;

    fn initial_state(&self) -> Self::State;
    fn is_goal(&self, state: &Self::State) -> bool;
    fn heuristic(&self, state: &Self::State) -> u64;
    fn action_cost(&self, action: &Self::Action) -> u64;
    /// Enumerates successors in the deterministic order the spec mandates: DRIVE, then
    /// DROP_OFF/UNLOAD, then LOAD/PICK_UP, then FLY. Generation order is a tie-breaker, not a
    /// cosmetic detail.
    fn enumerate(&self, state: &Self::State) -> Vec<(Self::Action, Self::State)>;
}

pub struct LogisticsProblem {
    pub setting: Setting,
    pub initial: Configuration,
}

impl LogisticsProblem {
    pub fn new(setting: Setting, initial: Configuration) -> Self {
        LogisticsProblem { setting, initial }
    }
}

impl Problem for LogisticsProblem {
    type State = Configuration;
    type Action = Action;

    fn initial_state(&self) -> Configuration {
        self.initial.clone()
    }

    fn is_goal(&self, state: &Configuration) -> bool {
        state.is_goal()
    }

    fn heuristic(&self, state: &Configuration) -> u64 {
        state.heuristic
    }

    fn action_cost(&self, action: &Action) -> u64 {
        action.cost()
    }

    fn enumerate(&self, state: &Configuration) -> Vec<(Action, Configuration)> {
        let mut result = Vec::new();

        for (truck_id, truck) in state.trucks.iter().enumerate() {
            let city = self.setting.place_city(truck.position);
            for place in self.setting.places_of(city) {
                if place != truck.position {
                    let action = Action::Drive { truck: truck_id, place };
                    let next = state.successor(&action, &self.setting);
                    result.push((action, next));
                }
            }
        }

        for (package_id, package) in state.packages.iter().enumerate() {
            match package.state {
                PackageState::InPlane => {
                    let action = Action::DropOff {
                        airplane: package.vehicle.expect("in-plane package must carry a vehicle id"),
                        package: package_id,
                    };
                    let next = state.successor(&action, &self.setting);
                    result.push((action, next));
                }
                PackageState::InTruck => {
                    let action = Action::Unload {
                        truck: package.vehicle.expect("in-truck package must carry a vehicle id"),
                        package: package_id,
                    };
                    let next = state.successor(&action, &self.setting);
                    result.push((action, next));
                }
                PackageState::Out => {}
            }
        }

        for (package_id, package) in state.packages.iter().enumerate() {
            if package.state != PackageState::Out {
                continue;
            }

            for (truck_id, truck) in state.trucks.iter().enumerate() {
                if truck.position == package.position && truck.load.len() < TRUCK_CAPACITY {
                    let action = Action::Load { truck: truck_id, package: package_id };
                    let next = state.successor(&action, &self.setting);
                    result.push((action, next));
                }
            }

            for (airplane_id, airplane) in state.airplanes.iter().enumerate() {
                if airplane.position == package.position && airplane.load.len() < PLANE_CAPACITY {
                    let action = Action::PickUp { airplane: airplane_id, package: package_id };
                    let next = state.successor(&action, &self.setting);
                    result.push((action, next));
                }
            }
        }

        for (airplane_id, airplane) in state.airplanes.iter().enumerate() {
            for &airport in self.setting.airports() {
                if airport != airplane.position {
                    let action = Action::Fly { airplane: airplane_id, airport };
                    let next = state.successor(&action, &self.setting);
                    result.push((action, next));
                }
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Package, Vehicle};

    fn two_place_setting() -> Setting {
        Setting::new(vec![0, 0], vec![0])
    }

    #[test]
    fn enumerate_respects_truck_capacity() {
        let setting = two_place_setting();
        let mut truck = Vehicle::new(0);
        for package in 0..TRUCK_CAPACITY {
            truck.load.insert(package);
        }
        let mut packages: Vec<Package> = (0..TRUCK_CAPACITY).map(|_| Package::new(0, 1)).collect();
        for package in &mut packages {
            package.state = PackageState::InTruck;
            package.vehicle = Some(0);
        }
        packages.push(Package::new(0, 1));

        let config = Configuration::new(vec![truck], vec![], packages, &setting);
        let problem = LogisticsProblem::new(setting, config.clone());
        let actions = problem.enumerate(&config);

        let loads = actions
            .iter()
            .filter(|(a, _)| matches!(a, Action::Load { truck: 0, .. }))
            .count();
        assert_eq!(loads, 0, "a full truck must not offer another LOAD");
    }

    #[test]
    fn enumerate_order_is_drive_unload_load_fly() {
        let setting = two_place_setting();
        let truck = Vehicle::new(0);
        let mut loaded = Package::new(0, 1);
        loaded.state = PackageState::InTruck;
        loaded.vehicle = Some(0);
        let out = Package::new(0, 1);
        let config = Configuration::new(vec![truck], vec![], vec![loaded, out], &setting);
        let problem = LogisticsProblem::new(setting, config.clone());
        let actions = problem.enumerate(&config);

        let kinds: Vec<&str> = actions
            .iter()
            .map(|(a, _)| match a {
                Action::Drive { .. } => "drive",
                Action::Unload { .. } => "unload",
                Action::Load { .. } => "load",
                Action::PickUp { .. } => "pickup",
                Action::Fly { .. } => "fly",
                Action::DropOff { .. } => "dropoff",
            })
            .collect();

        let first_unload = kinds.iter().position(|k| *k == "unload").unwrap();
        let first_drive = kinds.iter().position(|k| *k == "drive").unwrap();
        let first_load = kinds.iter().position(|k| *k == "load").unwrap();
        assert!(first_drive < first_unload);
        assert!(first_unload < first_load);
    }
}
