//! Visibility policy
//!
//! Pure predicates deciding what a given identity may see. Every projector
//! routes its row filtering and field shaping through these functions so the
//! rules stay consistent across resource kinds. Nothing here touches the
//! database or mutates state.

use uuid::Uuid;

use crate::models::{Capability, Contest, Identity, Problem, Submission};

fn any_shared_org(memberships: &[Uuid], restricted_to: &[Uuid]) -> bool {
    memberships.iter().any(|org| restricted_to.contains(org))
}

/// Ownership or elevated-permission check for a contest
pub fn is_contest_editable(contest: &Contest, identity: &Identity) -> bool {
    if identity.has(Capability::EditAllContests) {
        return true;
    }
    identity
        .profile_id()
        .is_some_and(|id| contest.organizers.contains(&id))
}

/// Whether the identity may see the contest at all.
///
/// Visibility is the conjunction of `is_visible` and none of the privacy
/// flags excluding the identity. Used both to filter the contest list and
/// as the single-entity gate (where failure is a 404, not an empty list).
pub fn contest_accessible(contest: &Contest, identity: &Identity) -> bool {
    if !contest.is_visible {
        return false;
    }
    let editable = is_contest_editable(contest, identity);
    if contest.is_private {
        let invited = identity
            .profile_id()
            .is_some_and(|id| contest.private_contestants.contains(&id));
        if !invited && !identity.has(Capability::SeePrivateContests) && !editable {
            return false;
        }
    }
    if contest.is_organization_private
        && !any_shared_org(identity.organizations(), &contest.organizations)
        && !editable
    {
        return false;
    }
    true
}

/// Whether the identity is presently inside this contest's window
pub fn in_contest(identity: &Identity, contest: &Contest) -> bool {
    identity.current_contest_id() == Some(contest.id)
}

/// Scoreboard gate: the full ranking is shown once the contest has ended,
/// to editors at any time, or whenever the scoreboard is configured public.
pub fn can_see_full_scoreboard(contest: &Contest, identity: &Identity) -> bool {
    contest.ended() || is_contest_editable(contest, identity) || contest.is_scoreboard_public
}

/// Problem-list gate, separate from the scoreboard gate
pub fn can_see_problem_list(contest: &Contest, identity: &Identity) -> bool {
    in_contest(identity, contest) || contest.ended() || is_contest_editable(contest, identity)
}

/// Whether the identity may see the problem at all
pub fn problem_accessible(problem: &Problem, identity: &Identity) -> bool {
    if identity.has(Capability::EditAllProblems) {
        return true;
    }
    if identity
        .profile_id()
        .is_some_and(|id| problem.is_authored_by(id))
    {
        return true;
    }
    if !problem.is_public {
        return false;
    }
    if problem.is_organization_private {
        return any_shared_org(identity.organizations(), &problem.organizations)
            || identity.has(Capability::SeeOrganizationProblem);
    }
    true
}

/// Whether the identity may see the submission's content: the owner always
/// can, so can holders of the view-all capability; otherwise the problem
/// must be fully public and the submission's contest context (if any) must
/// already show its scoreboard.
pub fn submission_accessible(
    submission: &Submission,
    problem: &Problem,
    contest: Option<&Contest>,
    identity: &Identity,
) -> bool {
    if identity.profile_id() == Some(submission.profile_id) {
        return true;
    }
    if identity.has(Capability::ViewAllSubmissions) {
        return true;
    }
    problem.is_public
        && !problem.is_organization_private
        && contest.is_none_or(|c| can_see_full_scoreboard(c, identity))
}

/// The masking gate for submission detail and source responses.
///
/// The accessibility check and the requester-in-a-contest check are OR'd:
/// either one alone forces the empty-object response. Masking is not an
/// error; it deliberately avoids confirming whether content exists.
pub fn submission_masked(
    submission: &Submission,
    problem: &Problem,
    contest: Option<&Contest>,
    identity: &Identity,
) -> bool {
    !submission_accessible(submission, problem, contest, identity)
        || identity.current_contest_id().is_some()
}

/// Whether problem-info responses must omit `types`, `points` and `partial`.
/// Applies while the requester is inside any live contest.
pub fn suppress_problem_scoring_fields(identity: &Identity) -> bool {
    identity.current_contest_id().is_some()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use chrono::{Duration, Utc};

    use super::*;
    use crate::models::ActingUser;

    fn contest(key: &str) -> Contest {
        let now = Utc::now();
        Contest {
            id: Uuid::new_v4(),
            key: key.to_string(),
            name: key.to_uppercase(),
            description: String::new(),
            start_time: now - Duration::hours(3),
            end_time: now - Duration::hours(1),
            time_limit_secs: None,
            tags: vec![],
            is_visible: true,
            is_private: false,
            is_organization_private: false,
            is_scoreboard_public: false,
            private_contestants: vec![],
            organizations: vec![],
            organizers: vec![],
            is_rated: false,
            rate_all: false,
            rating_floor: None,
            rating_ceiling: None,
            format_name: "default".to_string(),
            format_config: serde_json::json!({}),
        }
    }

    fn problem(code: &str) -> Problem {
        Problem {
            id: Uuid::new_v4(),
            code: code.to_string(),
            name: code.to_uppercase(),
            description: String::new(),
            group_name: "Uncategorized".to_string(),
            authors: vec![],
            types: vec![],
            time_limit: 2.0,
            memory_limit: 262144,
            allowed_languages: vec![],
            points: 100.0,
            partial: false,
            is_public: true,
            is_organization_private: false,
            organizations: vec![],
        }
    }

    fn submission(owner: Uuid, problem: &Problem) -> Submission {
        Submission {
            id: Uuid::new_v4(),
            profile_id: owner,
            problem_id: problem.id,
            participation_id: None,
            time: Some(0.5),
            memory: Some(1024.0),
            points: Some(100.0),
            language: "rust".to_string(),
            status: "D".to_string(),
            result: Some("AC".to_string()),
            source: String::new(),
            case_points: 100.0,
            case_total: 100.0,
            submitted_at: Utc::now(),
        }
    }

    fn user(profile_id: Uuid) -> Identity {
        Identity::User(ActingUser {
            profile_id,
            username: "alice".to_string(),
            capabilities: HashSet::new(),
            organizations: vec![],
            current_contest_id: None,
        })
    }

    fn user_with(capability: Capability) -> Identity {
        let mut identity = user(Uuid::new_v4());
        if let Identity::User(ref mut u) = identity {
            u.capabilities.insert(capability);
        }
        identity
    }

    #[test]
    fn invisible_contest_is_inaccessible_even_to_editors() {
        let mut c = contest("hidden");
        c.is_visible = false;
        assert!(!contest_accessible(&c, &Identity::Anonymous));
        assert!(!contest_accessible(&c, &user_with(Capability::EditAllContests)));
    }

    #[test]
    fn private_contest_admits_only_invitees_and_privileged() {
        let invitee = Uuid::new_v4();
        let mut c = contest("secret");
        c.is_private = true;
        c.private_contestants = vec![invitee];

        assert!(!contest_accessible(&c, &Identity::Anonymous));
        assert!(!contest_accessible(&c, &user(Uuid::new_v4())));
        assert!(contest_accessible(&c, &user(invitee)));
        assert!(contest_accessible(&c, &user_with(Capability::SeePrivateContests)));
        assert!(contest_accessible(&c, &user_with(Capability::EditAllContests)));
    }

    #[test]
    fn organization_contest_requires_shared_org() {
        let org = Uuid::new_v4();
        let mut c = contest("orgonly");
        c.is_organization_private = true;
        c.organizations = vec![org];

        assert!(!contest_accessible(&c, &user(Uuid::new_v4())));

        let mut member = user(Uuid::new_v4());
        if let Identity::User(ref mut u) = member {
            u.organizations.push(org);
        }
        assert!(contest_accessible(&c, &member));
    }

    #[test]
    fn public_visible_contest_is_open_to_anonymous() {
        assert!(contest_accessible(&contest("abc123"), &Identity::Anonymous));
    }

    #[test]
    fn ended_contest_shows_problems_and_scoreboard_to_anonymous() {
        let c = contest("abc123");
        assert!(c.ended());
        assert!(can_see_problem_list(&c, &Identity::Anonymous));
        assert!(can_see_full_scoreboard(&c, &Identity::Anonymous));
    }

    #[test]
    fn running_contest_hides_problems_unless_in_it_or_editing() {
        let mut c = contest("live");
        c.end_time = Utc::now() + Duration::hours(1);

        assert!(!can_see_problem_list(&c, &Identity::Anonymous));
        assert!(can_see_problem_list(&c, &user_with(Capability::EditAllContests)));

        let mut contestant = user(Uuid::new_v4());
        if let Identity::User(ref mut u) = contestant {
            u.current_contest_id = Some(c.id);
        }
        assert!(can_see_problem_list(&c, &contestant));
    }

    #[test]
    fn running_scoreboard_needs_public_flag_or_edit_rights() {
        let mut c = contest("live");
        c.end_time = Utc::now() + Duration::hours(1);

        assert!(!can_see_full_scoreboard(&c, &user(Uuid::new_v4())));
        assert!(can_see_full_scoreboard(&c, &user_with(Capability::EditAllContests)));

        c.is_scoreboard_public = true;
        assert!(can_see_full_scoreboard(&c, &Identity::Anonymous));
    }

    #[test]
    fn non_public_problem_visible_to_author_and_editor_only() {
        let author = Uuid::new_v4();
        let mut p = problem("hidden1");
        p.is_public = false;
        p.authors = vec![author];

        assert!(!problem_accessible(&p, &Identity::Anonymous));
        assert!(!problem_accessible(&p, &user(Uuid::new_v4())));
        assert!(problem_accessible(&p, &user(author)));
        assert!(problem_accessible(&p, &user_with(Capability::EditAllProblems)));
    }

    #[test]
    fn organization_problem_requires_membership_or_capability() {
        let org = Uuid::new_v4();
        let mut p = problem("orgp");
        p.is_organization_private = true;
        p.organizations = vec![org];

        assert!(!problem_accessible(&p, &user(Uuid::new_v4())));
        assert!(problem_accessible(&p, &user_with(Capability::SeeOrganizationProblem)));

        let mut member = user(Uuid::new_v4());
        if let Identity::User(ref mut u) = member {
            u.organizations.push(org);
        }
        assert!(problem_accessible(&p, &member));
    }

    #[test]
    fn owner_always_sees_own_submission() {
        let owner = Uuid::new_v4();
        let mut p = problem("p1");
        p.is_public = false;
        let s = submission(owner, &p);
        assert!(submission_accessible(&s, &p, None, &user(owner)));
        assert!(!submission_accessible(&s, &p, None, &user(Uuid::new_v4())));
    }

    #[test]
    fn public_problem_submission_gated_by_contest_scoreboard() {
        let p = problem("p2");
        let s = submission(Uuid::new_v4(), &p);
        let viewer = user(Uuid::new_v4());

        let mut running = contest("live");
        running.end_time = Utc::now() + Duration::hours(1);
        assert!(!submission_accessible(&s, &p, Some(&running), &viewer));

        let ended = contest("done");
        assert!(submission_accessible(&s, &p, Some(&ended), &viewer));
        assert!(submission_accessible(&s, &p, None, &viewer));
    }

    #[test]
    fn masking_gates_are_ored_never_independently_bypassable() {
        let owner = Uuid::new_v4();
        let p = problem("p3");
        let s = submission(owner, &p);

        // Accessible, requester not in a contest: shown.
        assert!(!submission_masked(&s, &p, None, &user(owner)));

        // Accessible, but the requester is inside some live contest: masked.
        let mut busy = user(owner);
        if let Identity::User(ref mut u) = busy {
            u.current_contest_id = Some(Uuid::new_v4());
        }
        assert!(submission_masked(&s, &p, None, &busy));

        // Inaccessible, requester idle: still masked.
        let mut hidden = problem("p4");
        hidden.is_public = false;
        let other = submission(Uuid::new_v4(), &hidden);
        assert!(submission_masked(&other, &hidden, None, &user(owner)));
    }

    #[test]
    fn scoring_fields_suppressed_only_while_in_contest() {
        assert!(!suppress_problem_scoring_fields(&Identity::Anonymous));
        assert!(!suppress_problem_scoring_fields(&user(Uuid::new_v4())));

        let mut busy = user(Uuid::new_v4());
        if let Identity::User(ref mut u) = busy {
            u.current_contest_id = Some(Uuid::new_v4());
        }
        assert!(suppress_problem_scoring_fields(&busy));
    }
}
