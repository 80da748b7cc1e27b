//! Pull-request description template.
//!
//! The document has a fixed layout; only the title, execution time, file
//! list and author block vary. Inputs are interpolated verbatim.

use crate::github::{badge_url, github_username};

pub const EXECUTION_TIME_PLACEHOLDER: &str = "N/A";

/// Fields interpolated into the description. `author_github` is expected
/// to be a normalized profile URL (see [`crate::github::normalize_author_github`]).
#[derive(Debug, Clone, Copy)]
pub struct DescriptionInput<'a> {
    pub problem_name: &'a str,
    pub execution_time: &'a str,
    pub problem_type: &'a str,
    pub difficulty: &'a str,
    pub author_name: &'a str,
    pub author_github: &'a str,
    pub solution_file: &'a str,
    pub readme_file: &'a str,
}

pub fn generate_pr_description(input: &DescriptionInput<'_>) -> String {
    let execution_time = if input.execution_time.is_empty() {
        EXECUTION_TIME_PLACEHOLDER
    } else {
        input.execution_time
    };
    let badge = badge_url(&github_username(input.author_github));

    format!(
        r#"# Title
Add solution and documentation for {problem_name}

---

## Summary
This pull request adds a new solution along with its corresponding documentation.

The implementation follows the repository’s standard structure and focuses on correctness, clarity, and consistency.

---

## Execution Time
{execution_time}

---

## Purpose / Context
The purpose of this contribution is to:

- Implement a working solution for the given problem  
- Maintain a consistent and organized repository structure  
- Improve readability and traceability of solutions  
- Document the approach for future reference  

This change ensures the solution is easy to understand and reuse.

---

## Overview of Implementation
- Implemented the core logic to solve the problem.  
- Followed a clear, step-by-step approach.  
- Ensured the solution handles standard and edge cases.  
- Returned the expected output as per the problem requirements.

---

## Key Design Points

### Clear Logic Flow
- Logic is written in a straightforward and traceable manner.  
- Steps are easy to follow and debug.

### Maintainability
- Code is structured to be readable and reusable.  
- Avoids unnecessary complexity.

### Safety
- Does not introduce side effects unless required.  
- Input handling follows expected constraints.

---

## Comparison / Rationale

### Current Implementation
- Prioritizes clarity and correctness.  
- Suitable for learning, review, and maintenance.

### Alternative Approaches
- Other approaches may improve performance or resource usage.  
- The chosen approach balances simplicity and reliability.

---

## Trade-offs

| Aspect | Decision |
|------|---------|
| Readability | Prioritized |
| Performance | Acceptable |
| Complexity | Kept minimal |
| Extensibility | High |

---

## Files Added / Modified
- {solution_file} — Solution implementation  
- {readme_file} — Documentation

---

## How to Test
1. Run the solution with sample inputs.  
2. Verify the output matches expected results.  
3. Test edge cases where applicable.

---

## Notes
- Implementation follows repository conventions.  
- Can be optimized or extended in future iterations.

---

## Author

**{author_name}**

[![GitHub]({badge})]({author_github})
"#,
        problem_name = input.problem_name,
        execution_time = execution_time,
        solution_file = input.solution_file,
        readme_file = input.readme_file,
        author_name = input.author_name,
        badge = badge,
        author_github = input.author_github,
    )
}
