//! Gravity domain: system modules wiring the controller into the schedule.

pub(crate) mod avian_body;
pub(crate) mod flip;
pub(crate) mod input;
pub(crate) mod step;

pub(crate) use flip::flip_gravity_on_activation;
pub(crate) use input::read_activation_input;
pub(crate) use step::step_gravity_controllers;
