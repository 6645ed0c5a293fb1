//! SELinux mount label reconciliation.
//!
//! Every volume of a pod is mounted with the same SELinux context, so the
//! options attached to the volumes must agree once translated into labels.

pub mod translator;

use podlabel_common::error::{PodLabelError, Result};
use podlabel_common::types::{MountLabel, SeLinuxOptions};

use self::translator::LabelTranslator;

/// Computes the single mount label shared by all volumes of a pod.
///
/// Absent entries are skipped. Present entries are translated and must all
/// yield the same label; entries translating to the empty label impose no
/// constraint. Returns the empty label when nothing requires a label or when
/// SELinux is disabled on the host.
///
/// # Errors
///
/// Returns [`PodLabelError::ConflictingLabels`] if two entries translate to
/// different labels, or the translator's error if a translation fails.
pub fn mount_selinux_label<'a, I, T>(options: I, translator: &T) -> Result<MountLabel>
where
    I: IntoIterator<Item = Option<&'a SeLinuxOptions>>,
    T: LabelTranslator + ?Sized,
{
    if !translator.selinux_enabled() {
        tracing::debug!("SELinux disabled, no mount label required");
        return Ok(MountLabel::default());
    }

    let mut merged: Option<MountLabel> = None;
    for opts in options.into_iter().flatten() {
        let label = translator.translate(opts)?;
        if label.is_empty() {
            continue;
        }
        if let Some(first) = &merged {
            if *first != label {
                tracing::warn!(
                    first = %first,
                    conflicting = %label,
                    "volumes disagree on SELinux label"
                );
                return Err(PodLabelError::ConflictingLabels {
                    first: first.to_string(),
                    conflicting: label.to_string(),
                });
            }
        } else {
            merged = Some(label);
        }
    }

    let label = merged.unwrap_or_default();
    tracing::debug!(label = %label, "mount SELinux label resolved");
    Ok(label)
}

#[cfg(test)]
mod tests {
    use super::translator::fake::FakeTranslator;
    use super::*;

    const LABEL1: &str = "system_u:object_r:container_file_t:s0:c123,c456";

    fn opts(level: &str) -> SeLinuxOptions {
        SeLinuxOptions::with_level(level)
    }

    #[test]
    fn no_options_yields_empty_label() {
        let none: Vec<Option<&SeLinuxOptions>> = Vec::new();
        let label = mount_selinux_label(none, &FakeTranslator::new()).expect("reconcile failed");
        assert!(label.is_empty());
    }

    #[test]
    fn only_absent_options_yield_empty_label() {
        let label =
            mount_selinux_label([None, None], &FakeTranslator::new()).expect("reconcile failed");
        assert!(label.is_empty());
    }

    #[test]
    fn single_option_yields_translated_label() {
        let o = opts("s0:c123,c456");
        let label =
            mount_selinux_label([Some(&o)], &FakeTranslator::new()).expect("reconcile failed");
        assert_eq!(label.as_str(), LABEL1);
    }

    #[test]
    fn repeated_options_yield_one_label() {
        let o = opts("s0:c123,c456");
        let input = [Some(&o), Some(&o), Some(&o), Some(&o)];
        let label = mount_selinux_label(input, &FakeTranslator::new()).expect("reconcile failed");
        assert_eq!(label.as_str(), LABEL1);
    }

    #[test]
    fn absent_entries_mixed_with_one_label_are_ignored() {
        let o = opts("s0:c123,c456");
        let label = mount_selinux_label([None, Some(&o), None], &FakeTranslator::new())
            .expect("reconcile failed");
        assert_eq!(label.as_str(), LABEL1);
    }

    #[test]
    fn different_options_conflict() {
        let (a, b, c) = (opts("s0:c123,c456"), opts("s0:c234,c567"), opts("s0:c345,c678"));
        let err = mount_selinux_label([Some(&a), Some(&b), Some(&c)], &FakeTranslator::new())
            .expect_err("must conflict");
        assert!(matches!(
            err,
            PodLabelError::ConflictingLabels { ref first, ref conflicting }
                if first == LABEL1
                    && conflicting == "system_u:object_r:container_file_t:s0:c234,c567"
        ));
    }

    /// Rejects any options carrying the given level.
    struct RejectingTranslator {
        bad_level: &'static str,
    }

    impl LabelTranslator for RejectingTranslator {
        fn translate(&self, options: &SeLinuxOptions) -> Result<MountLabel> {
            if options.level == self.bad_level {
                return Err(PodLabelError::InvalidLabel {
                    label: options.level.clone(),
                });
            }
            FakeTranslator::new().translate(options)
        }

        fn selinux_enabled(&self) -> bool {
            true
        }
    }

    #[test]
    fn translator_error_propagates_unchanged() {
        let translator = RejectingTranslator { bad_level: "s0:c234,c567" };
        let (a, b) = (opts("s0:c123,c456"), opts("s0:c234,c567"));
        let err = mount_selinux_label([Some(&a), Some(&b)], &translator)
            .expect_err("translation failure must surface");
        assert!(matches!(
            err,
            PodLabelError::InvalidLabel { ref label } if label == "s0:c234,c567"
        ));
    }

    #[test]
    fn translator_error_on_first_entry_stops_reconciliation() {
        let translator = RejectingTranslator { bad_level: "s0:c123,c456" };
        let (a, b) = (opts("s0:c123,c456"), opts("s0:c234,c567"));
        let err = mount_selinux_label([Some(&a), Some(&b)], &translator)
            .expect_err("translation failure must surface");
        assert!(!matches!(err, PodLabelError::ConflictingLabels { .. }));
        assert!(matches!(err, PodLabelError::InvalidLabel { .. }));
    }

    #[test]
    fn disabled_selinux_skips_translation() {
        let (a, b) = (opts("s0:c1,c2"), opts("s0:c3,c4"));
        let label = mount_selinux_label([Some(&a), Some(&b)], &FakeTranslator::disabled())
            .expect("reconcile failed");
        assert!(label.is_empty());
    }

    #[test]
    fn works_through_trait_object() {
        let translator: Box<dyn LabelTranslator> = Box::new(FakeTranslator::new());
        let o = opts("s0:c123,c456");
        let label =
            mount_selinux_label([Some(&o)], translator.as_ref()).expect("reconcile failed");
        assert_eq!(label.as_str(), LABEL1);
    }
}
