use tracing::debug;

use crate::core::{
    Category, PassFailCounts, ProgressRecord, RecentResult, TransactionRecord, UserProfile,
    aggregate_categories, build_cumulative_series, latest_results,
};
use crate::error::ChartResult;
use crate::interaction::HoverController;
use crate::render::{Renderer, Scene};

use super::{
    ChartConfig, LineChart, ProfileSummary, compose_audit_gauge, compose_bar_chart,
    compose_line_chart, compose_proportion_chart,
};

/// Records for one dashboard render, as returned by the query service.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardInput {
    pub profile: UserProfile,
    pub transactions: Vec<TransactionRecord>,
    pub progress: Vec<ProgressRecord>,
    /// Latest progress entries, newest first.
    pub recent_progress: Vec<ProgressRecord>,
}

/// Everything composed for one dashboard render.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardScenes {
    pub summary: ProfileSummary,
    pub cumulative: LineChart,
    pub pass_fail: Scene,
    pub audit: Scene,
    pub top_categories: Vec<Category>,
    pub categories: Scene,
    pub recent_results: Vec<RecentResult>,
}

impl DashboardScenes {
    /// Chart scenes in page order.
    #[must_use]
    pub fn scenes(&self) -> [&Scene; 4] {
        [
            &self.cumulative.scene,
            &self.pass_fail,
            &self.audit,
            &self.categories,
        ]
    }
}

/// Main facade consumed by host applications.
///
/// `ChartEngine` holds a validated configuration, composes scenes from plain
/// records and forwards them to a renderer. It keeps no data between calls.
pub struct ChartEngine<R: Renderer> {
    renderer: R,
    config: ChartConfig,
}

impl<R: Renderer> ChartEngine<R> {
    pub fn new(renderer: R, config: ChartConfig) -> ChartResult<Self> {
        config.validate()?;
        Ok(Self { renderer, config })
    }

    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: ChartConfig) -> ChartResult<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// Cumulative line chart over the transactions' amounts.
    pub fn compose_cumulative_chart(
        &self,
        transactions: &[TransactionRecord],
    ) -> ChartResult<LineChart> {
        let points = build_cumulative_series(transactions, &self.config.date_label_format);
        compose_line_chart(
            &points,
            &self.config.line_chart,
            self.config.value_tuning(),
            &self.config.tooltip,
        )
    }

    pub fn compose_pass_fail_chart(&self, progress: &[ProgressRecord]) -> ChartResult<Scene> {
        let counts = PassFailCounts::from_progress(progress);
        compose_proportion_chart(counts.passes, counts.fails, &self.config.proportion_chart)
    }

    pub fn compose_audit_gauge(&self, ratio: f64) -> ChartResult<Scene> {
        compose_audit_gauge(ratio, self.config.audit_scale_cap, &self.config.audit_gauge)
    }

    /// Top categories by total and their bar chart.
    pub fn compose_category_chart(
        &self,
        transactions: &[TransactionRecord],
    ) -> ChartResult<(Vec<Category>, Scene)> {
        let categories = aggregate_categories(transactions, &self.config.aggregation())?;
        let scene = compose_bar_chart(&categories, &self.config.bar_chart)?;
        Ok((categories, scene))
    }

    pub fn compose_dashboard(&self, input: &DashboardInput) -> ChartResult<DashboardScenes> {
        let cumulative = self.compose_cumulative_chart(&input.transactions)?;
        let pass_fail = self.compose_pass_fail_chart(&input.progress)?;
        let audit = self.compose_audit_gauge(input.profile.audit_ratio)?;
        let (top_categories, categories) = self.compose_category_chart(&input.transactions)?;
        let recent_results =
            latest_results(&input.recent_progress, &self.config.date_label_format);
        let summary = ProfileSummary::build(&input.profile, &input.transactions, &input.progress);

        debug!(
            transactions = input.transactions.len(),
            progress = input.progress.len(),
            categories = top_categories.len(),
            recent = recent_results.len(),
            "composed dashboard"
        );
        Ok(DashboardScenes {
            summary,
            cumulative,
            pass_fail,
            audit,
            top_categories,
            categories,
            recent_results,
        })
    }

    /// Hover controller for a composed line chart; `None` for a placeholder.
    #[must_use]
    pub fn hover_controller(&self, chart: &LineChart) -> Option<HoverController> {
        chart
            .plot
            .clone()
            .map(|plot| HoverController::new(plot, self.config.tooltip.clone()))
    }

    pub fn render(&mut self, scene: &Scene) -> ChartResult<()> {
        self.renderer.render(scene)
    }

    pub fn render_dashboard(&mut self, scenes: &DashboardScenes) -> ChartResult<()> {
        for scene in scenes.scenes() {
            self.renderer.render(scene)?;
        }
        Ok(())
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
