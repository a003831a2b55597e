//! Example demonstrating basic voting ledger functionality

use vote_core::Address;
use vote_ledger::{LedgerConfig, LedgerError};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("🗳️  Voting Ledger Demo");
    println!("=====================");

    // Create the participants
    println!("\n1. Creating identities...");
    let owner = Address::from_hex("1234567890abcdef1234567890abcdef12345678")?;
    let voter1 = Address::from_hex("abcdef1234567890abcdef1234567890abcdef12")?;
    let voter2 = Address::from_hex("567890abcdef1234567890abcdef1234567890ab")?;

    println!("   Owner address: {}", owner);
    println!("   Voter 1: {}", voter1);
    println!("   Voter 2: {}", voter2);

    // Build a ledger from genesis configuration
    println!("\n2. Building the ledger...");
    let config = LedgerConfig::new(owner, vec![1, 2]);
    let mut ledger = config.build()?;
    println!("   Candidates registered: {}", ledger.candidate_count());
    println!("   Voting active: {}", ledger.voting_active());

    // Open the voting phase
    println!("\n3. Opening the voting phase...");
    ledger.start_voting(owner)?;
    println!("   Voting active: {}", ledger.voting_active());

    // Cast some votes
    println!("\n4. Casting votes...");
    ledger.submit_vote(voter1, 1, 75)?;
    ledger.submit_vote(voter2, 1, 30)?;
    ledger.submit_vote(voter1, 2, 90)?;
    println!("   Voter 1 voted for candidate 1: {}", ledger.has_voted(voter1, 1));
    println!("   Candidate 1 average: {}", ledger.average_rating(1)?);
    println!("   Candidate 2 average: {}", ledger.average_rating(2)?);

    // A second vote from the same voter is rejected
    println!("\n5. Rejecting a duplicate vote...");
    match ledger.submit_vote(voter1, 1, 100) {
        Err(LedgerError::DuplicateVote { voter, id }) => {
            println!("   Rejected: {} already voted for candidate {}", voter, id);
        }
        other => println!("   Unexpected result: {:?}", other),
    }

    // Close the voting phase
    println!("\n6. Closing the voting phase...");
    ledger.end_voting(owner)?;
    match ledger.submit_vote(voter2, 2, 80) {
        Err(LedgerError::VotingInactive) => {
            println!("   Rejected: voting is no longer active");
        }
        other => println!("   Unexpected result: {:?}", other),
    }

    println!("\n✅ All operations completed successfully!");
    println!("   - Genesis config and candidate registration ✓");
    println!("   - Phase control ✓");
    println!("   - Vote admission and aggregation ✓");
    println!("   - Typed rejections ✓");

    Ok(())
}
