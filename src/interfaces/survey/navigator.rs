use tracing::info;

use super::SurveyNavigator;

/// Logs the advance signal; used by the binary where there is no survey page
#[derive(Debug, Default)]
pub struct ConsoleNavigator;

impl SurveyNavigator for ConsoleNavigator {
    fn advance(&mut self) {
        info!("Advancing to next survey step");
    }
}

#[derive(Debug, Default)]
pub struct CountingNavigator {
    pub advances: usize,
}

impl SurveyNavigator for CountingNavigator {
    fn advance(&mut self) {
        self.advances += 1;
    }
}
