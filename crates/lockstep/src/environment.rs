use std::io::IsTerminal;

const NO_TTY_VAR: &str = "LOCKSTEP_NO_TTY";
const FORCE_TTY_VAR: &str = "LOCKSTEP_FORCE_TTY";

/// CI services announce themselves through one of these.
const CI_VARS: &[&str] = &[
    "CI",
    "GITHUB_ACTIONS",
    "GITLAB_CI",
    "CIRCLECI",
    "TRAVIS",
    "JENKINS_URL",
    "BUILDKITE",
    "TF_BUILD",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NonInteractiveReason {
    ExplicitDisable,
    CiDetected { env_var: String },
    NoTerminal,
}

pub fn is_interactive() -> bool {
    non_interactive_reason().is_none()
}

/// Why prompting is off, if it is. `LOCKSTEP_NO_TTY` always wins,
/// `LOCKSTEP_FORCE_TTY` overrides CI and terminal detection.
pub fn non_interactive_reason() -> Option<NonInteractiveReason> {
    if is_set(NO_TTY_VAR) {
        return Some(NonInteractiveReason::ExplicitDisable);
    }
    if is_set(FORCE_TTY_VAR) {
        return None;
    }

    if let Some(env_var) = CI_VARS.iter().find(|var| is_set(var)) {
        return Some(NonInteractiveReason::CiDetected {
            env_var: (*env_var).to_owned(),
        });
    }

    (!std::io::stdin().is_terminal()).then_some(NonInteractiveReason::NoTerminal)
}

fn is_set(var: &str) -> bool {
    std::env::var_os(var).is_some()
}
