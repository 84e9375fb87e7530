use log::warn;

use crate::content::ResolvedLink;
use crate::dates::normalize_range;
use crate::document::IndicateurId;
use crate::registry::{ChartRegistry, RangeAnnotation};
use crate::sections::{SectionId, SectionState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HighlightOutcome {
    Applied,
    UnknownTarget,
}

/// Applies paragraph-driven emphasis to the chart registry. Unknown
/// targets never mutate registry state.
pub struct HighlightController {
    registry: ChartRegistry,
}

impl HighlightController {
    pub fn new(registry: ChartRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &ChartRegistry {
        &self.registry
    }

    /// Thickens the target's series and overlays the period range. An
    /// unreadable range keeps the emphasis but skips the annotation, and
    /// a repeated highlight replaces the previous annotation for the
    /// same target rather than stacking a second one.
    pub fn highlight(&mut self, target: &IndicateurId, debut: &str, fin: &str) -> HighlightOutcome {
        let Some(entry) = self.registry.entry_mut(target) else {
            warn!("highlight targets unknown indicateur {target}, ignoring");
            return HighlightOutcome::UnknownTarget;
        };
        entry.set_emphasis(Some(0));
        match normalize_range(debut, fin) {
            Some((start, end)) => {
                entry.set_annotation(target.clone(), RangeAnnotation { start, end });
            }
            None => {
                warn!("range {debut:?}..{fin:?} on {target} is unreadable, emphasis only");
            }
        }
        entry.mark_refreshed();
        HighlightOutcome::Applied
    }

    pub fn unhighlight(&mut self, target: &IndicateurId) -> HighlightOutcome {
        let Some(entry) = self.registry.entry_mut(target) else {
            warn!("unhighlight targets unknown indicateur {target}, ignoring");
            return HighlightOutcome::UnknownTarget;
        };
        entry.set_emphasis(None);
        entry.remove_annotation(target);
        entry.mark_refreshed();
        HighlightOutcome::Applied
    }

    /// Click navigation. Switches to the charts section and hands back
    /// the scroll target; the caller owns the actual scroll.
    pub fn focus(
        &self,
        target: &IndicateurId,
        sections: &mut SectionState,
    ) -> Option<IndicateurId> {
        if !self.registry.contains(target) {
            warn!("focus targets unknown indicateur {target}, ignoring");
            return None;
        }
        sections.activate(SectionId::Indicateurs);
        Some(target.clone())
    }
}

/// Position of a link within the resolved paragraphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkAnchor {
    pub paragraphe: usize,
    pub lien: usize,
}

/// Turns the per-frame "which link is under the pointer" answer into
/// ordered leave/enter transitions, so moving straight from one link to
/// another unhighlights the old target before highlighting the new one.
#[derive(Debug, Default)]
pub struct LinkHoverState {
    current: Option<(LinkAnchor, IndicateurId)>,
}

impl LinkHoverState {
    pub fn observe(
        &mut self,
        hovered: Option<(LinkAnchor, &ResolvedLink)>,
        controller: &mut HighlightController,
    ) {
        let next_anchor = hovered.as_ref().map(|(anchor, _)| *anchor);
        if self.current.as_ref().map(|(anchor, _)| *anchor) == next_anchor {
            return;
        }
        if let Some((_, previous)) = self.current.take() {
            controller.unhighlight(&previous);
        }
        if let Some((anchor, link)) = hovered {
            controller.highlight(&link.target, &link.range.start, &link.range.end);
            self.current = Some((anchor, link.target.clone()));
        }
    }

    pub fn clear(&mut self, controller: &mut HighlightController) {
        self.observe(None, controller);
    }

    pub fn current_anchor(&self) -> Option<LinkAnchor> {
        self.current.as_ref().map(|(anchor, _)| *anchor)
    }
}
