use bevy::prelude::*;

use crate::engine::core::session::FrameBudget;

/// Request exit once the frame budget, if any, is used up.
pub fn enforce_frame_budget(mut budget: ResMut<FrameBudget>, mut exit: EventWriter<AppExit>) {
    if budget.tick() {
        info!("Frame budget of {} frames reached, exiting", budget.frames_elapsed);
        exit.write(AppExit::Success);
    }
}
