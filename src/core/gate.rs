use crate::domain::model::CourseModule;

/// Decides whether a module's code and notebook links are withheld.
pub trait AccessGate: Send + Sync {
    fn is_gated(&self, module: &CourseModule) -> bool;
}

/// 依每個單元的 `enroll_needed` 旗標決定
#[derive(Debug, Clone, Copy, Default)]
pub struct EnrollmentGate;

impl AccessGate for EnrollmentGate {
    fn is_gated(&self, module: &CourseModule) -> bool {
        module.resources.enroll_needed
    }
}

impl<F> AccessGate for F
where
    F: Fn(&CourseModule) -> bool + Send + Sync,
{
    fn is_gated(&self, module: &CourseModule) -> bool {
        self(module)
    }
}
