use super::{Resource, SupportsSimilar, Updatable};
use crate::models::{Coach, CoachUpdate, NewCoach};

/// `/coaches`
#[derive(Debug, Clone, Copy)]
pub struct Coaches;

impl Resource for Coaches {
    const PATH: &'static str = "coaches";
    const NAME: &'static str = "coach";

    type Item = Coach;
    type Create = NewCoach;
}

impl Updatable for Coaches {
    type Update = CoachUpdate;
}

impl SupportsSimilar for Coaches {}
