//! Shared builders for integration tests
#![allow(dead_code)]

use num_bigint::BigInt;
use num_traits::Zero;

use swaplens::parser::types::{ BalanceChange, Instruction, RawTransaction, TransactionMeta };

pub fn change(mint: &str, owner: &str, delta: i128, decimals: u8) -> BalanceChange {
    BalanceChange {
        mint: mint.to_string(),
        owner: owner.to_string(),
        pre_delta: BigInt::zero(),
        post_delta: BigInt::from(delta),
        decimals,
    }
}

pub fn instruction(program_id: &str, name: &str) -> Instruction {
    Instruction {
        program_id: program_id.to_string(),
        name: name.to_string(),
    }
}

pub fn tx(
    fee_payer: &str,
    signers: &[&str],
    changes: Vec<BalanceChange>,
    instructions: Vec<Instruction>
) -> RawTransaction {
    RawTransaction {
        signature: "5ig".repeat(20),
        timestamp: 1_700_000_000_000,
        balance_changes: changes,
        transaction_meta: TransactionMeta {
            fee_payer: fee_payer.to_string(),
            signers: signers.iter().map(|s| s.to_string()).collect(),
            instructions,
        },
        protocol: "raydium".to_string(),
    }
}
