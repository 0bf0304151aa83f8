/// Runtime failures of the sampling and generator tasks
///
/// Both tasks loop forever. They only return on a hardware error, which is fatal to the task.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error<E> {
    /// The sample source failed to deliver a conversion
    #[error("sample acquisition failed: {0:?}")]
    Acquisition(E),
    /// A digital output could not be driven
    #[error("digital output failed: {0:?}")]
    Output(E),
}
