//! Example: Driving a support case through its lifecycle
//!
//! This example creates a technical case, adds a comment, resolves it, and
//! cleans up again.
//!
//! # Setup
//!
//! 1. Set up environment variables: ```bash export
//!    CASEDESK_URL=https://support.example.com/case-management/v1 export
//!    CASEDESK_AUTH_TOKEN=... ```
//!
//!    (or point `CASEDESK_CREDENTIALS_FILE` at a casedesk.env file)
//!
//! 2. Run this example: ```bash cargo run --example case_lifecycle ```

use casedesk_client::{
    AddCommentOptions, CaseManagementClient, CreateCaseOptions, UpdateCaseStatusOptions,
};
use casedesk_client::cases::StatusPayload;
use casedesk_domain::{Offering, OfferingType, OFFERING_TYPE_GROUP_CRN_SERVICE_NAME};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    println!("Case Lifecycle Example");
    println!("======================\n");

    let client = CaseManagementClient::from_env()?;

    let options = CreateCaseOptions::new(
        "technical",
        "Example case from the Rust SDK",
        "Safe to close; created by the case_lifecycle example.",
    )
    .severity(4)
    .offering(Offering::new(
        "Cloud Object Storage",
        OfferingType::new(OFFERING_TYPE_GROUP_CRN_SERVICE_NAME, "cloud-object-storage"),
    ));

    let case = client.create_case(&options).await?;
    let number = case.number.unwrap_or_default();
    println!("✓ Created case {}", number);

    let comment = client
        .add_comment(&AddCommentOptions::new(&number, "Example comment from the SDK"))
        .await?;
    println!("✓ Added comment at {}", comment.added_at.unwrap_or_default());

    let resolved = client
        .update_case_status(&UpdateCaseStatusOptions::new(
            &number,
            StatusPayload::resolve_with_comment(1, "Closing the example case"),
        ))
        .await?;
    println!("✓ Case is now {}", resolved.status.unwrap_or_default());

    Ok(())
}
