//! Vehicles, packages, actions, and the `Configuration` search state.
//!
//! A `Configuration` is a plain value: every transition produces a fresh one by cloning the
//! previous vectors and mutating the clone, mirroring the source's
//! `trucks = trucks_; airplanes = airplanes_; packages = packages_;` defensive-copy shape.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::heuristic;
use crate::setting::Setting;

pub const DRIVE_COST: u64 = 17;
pub const LOAD_UNLOAD_COST: u64 = 2;
pub const FLY_COST: u64 = 1000;
pub const PICK_UP_COST: u64 = 14;
pub const DROP_OFF_COST: u64 = 11;

pub const TRUCK_CAPACITY: usize = 4;
pub const PLANE_CAPACITY: usize = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vehicle {
    pub position: usize,
    pub load: BTreeSet<usize>,
}

impl Vehicle {
    pub fn new(position: usize) -> Self {
        Vehicle {
            position,
            load: BTreeSet::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageState {
    Out,
    InTruck,
    InPlane,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Package {
    pub position: usize,
    pub destination: usize,
    pub state: PackageState,
    pub vehicle: Option<usize>,
}

impl Package {
    pub fn new(position: usize, destination: usize) -> Self {
        Package {
            position,
            destination,
            state: PackageState::Out,
            vehicle: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Action {
    Drive { truck: usize, place: usize },
    Load { truck: usize, package: usize },
    Unload { truck: usize, package: usize },
    Fly { airplane: usize, airport: usize },
    PickUp { airplane: usize, package: usize },
    DropOff { airplane: usize, package: usize },
}

impl Action {
    pub fn cost(&self) -> u64 {
        match self {
            Action::Drive { .. } => DRIVE_COST,
            Action::Load { .. } | Action::Unload { .. } => LOAD_UNLOAD_COST,
            Action::Fly { .. } => FLY_COST,
            Action::PickUp { .. } => PICK_UP_COST,
            Action::DropOff { .. } => DROP_OFF_COST,
        }
    }

    /// Renders the action in the exact textual form §6 of the spec mandates.
    pub fn render(&self) -> String {
        match self {
            Action::Drive { truck, place } => format!("drive {truck} {place}"),
            Action::Load { truck, package } => format!("load {truck} {package}"),
            Action::Unload { truck, package } => format!("unload {truck} {package}"),
            Action::Fly { airplane, airport } => format!("fly {airplane} {airport}"),
            Action::PickUp { airplane, package } => format!("pickUp {airplane} {package}"),
            Action::DropOff { airplane, package } => format!("dropOff {airplane} {package}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    pub trucks: Vec<Vehicle>,
    pub airplanes: Vec<Vehicle>,
    pub packages: Vec<Package>,
    pub heuristic: u64,
}

impl Configuration {
    pub fn new(
        trucks: Vec<Vehicle>,
        airplanes: Vec<Vehicle>,
        packages: Vec<Package>,
        setting: &Setting,
    ) -> Self {
        let heuristic = heuristic::heuristic(setting, &trucks, &airplanes, &packages);
        Configuration {
            trucks,
            airplanes,
            packages,
            heuristic,
        }
    }

    pub fn is_goal(&self) -> bool {
        self.packages
            .iter()
            .all(|p| p.position == p.destination && p.state == PackageState::Out)
    }

    /// Produces the `Configuration` reached by applying `action`, without mutating `self`.
    /// Capacity is not enforced here; that is the successor enumerator's job (component D).
    pub fn successor(&self, action: &Action, setting: &Setting) -> Configuration {
        let mut trucks = self.trucks.clone();
        let mut airplanes = self.airplanes.clone();
        let mut packages = self.packages.clone();

        match *action {
            Action::Drive { truck, place } => {
                trucks[truck].position = place;
                for &package in &trucks[truck].load {
                    packages[package].position = place;
                }
            }
            Action::Load { truck, package } => {
                trucks[truck].load.insert(package);
                packages[package].state = PackageState::InTruck;
                packages[package].vehicle = Some(truck);
            }
            Action::Unload { truck, package } => {
                trucks[truck].load.remove(&package);
                packages[package].state = PackageState::Out;
                packages[package].vehicle = None;
            }
            Action::Fly { airplane, airport } => {
                airplanes[airplane].position = airport;
                for &package in &airplanes[airplane].load {
                    packages[package].position = airport;
                }
            }
            Action::PickUp { airplane, package } => {
                airplanes[airplane].load.insert(package);
                packages[package].state = PackageState::InPlane;
                packages[package].vehicle = Some(airplane);
            }
            Action::DropOff { airplane, package } => {
                airplanes[airplane].load.remove(&package);
                packages[package].state = PackageState::Out;
                packages[package].vehicle = None;
            }
        }

        Configuration::new(trucks, airplanes, packages, setting)
    }
}
