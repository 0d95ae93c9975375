use yewdux::prelude::*;

/// App-wide state shared through yewdux.
#[derive(Default, Clone, PartialEq, Store)]
pub struct State {
    /// Bumped to ask every data-backed view to refetch. Views that load
    /// server data key their fetch effects on this value.
    pub refresh_epoch: u64,
}

impl State {
    pub fn request_refresh(&mut self) {
        self.refresh_epoch = self.refresh_epoch.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refresh_bumps_epoch() {
        let mut state = State::default();
        state.request_refresh();
        state.request_refresh();
        assert_eq!(state.refresh_epoch, 2);

        state.refresh_epoch = u64::MAX;
        state.request_refresh();
        assert_eq!(state.refresh_epoch, 0);
    }
}
