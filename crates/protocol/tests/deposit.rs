//! Deposit round trip through a configured manager: build the deposit, then find and consume
//! its receipt.

#![expect(unused_crate_dependencies, reason = "test dependencies")]

use futures::TryStreamExt;
use ickb_config::ProtocolConfig;
use ickb_ledger_client::{CellPage, Cursor, MockLedgerClient};
use ickb_primitives::{Cell, FixedPoint, OutPoint, Script, ScriptHashType};
use ickb_protocol::{FindReceiptsOptions, ProtocolManager, Receipt, ReceiptData};
use ickb_test_utils::{buf32, header};
use ickb_tx_builder::{TxBuilder, TxSkeleton};

const CONFIG: &str = r#"
[ickb_logic]
code_hash = "0x0909090909090909090909090909090909090909090909090909090909090909"
hash_type = "data1"

[[ickb_logic_deps]]
tx_hash = "0x0101010101010101010101010101010101010101010101010101010101010101"
index = 0

[dao]
code_hash = "0x3232323232323232323232323232323232323232323232323232323232323232"
hash_type = "type"

[[dao_deps]]
tx_hash = "0x0202020202020202020202020202020202020202020202020202020202020202"
index = 2
dep_type = "dep_group"

[udt]
code_hash = "0x0707070707070707070707070707070707070707070707070707070707070707"
hash_type = "data1"
args = "0x0a0b"

[[udt_deps]]
tx_hash = "0x0101010101010101010101010101010101010101010101010101010101010101"
index = 1
"#;

fn owner() -> Script {
    Script::new(buf32(0xaa), ScriptHashType::Type, vec![0xaa; 20])
}

fn manager() -> ProtocolManager {
    let config = ProtocolConfig::from_toml_str(CONFIG).unwrap();
    ProtocolManager::from_config(&config).unwrap()
}

#[test]
fn deposit_three_times_min() {
    let m = manager();
    let mut tx = TxSkeleton::new();
    let amount = FixedPoint::from_ckb(1_082);

    m.deposit(&mut tx, 3, amount, &owner()).unwrap();

    assert_eq!(tx.output_count(), 4);
    for idx in 0..3 {
        let (deposit, data) = tx.output(idx).unwrap();
        assert_eq!(deposit.capacity(), amount);
        assert_eq!(deposit.lock(), m.script());
        assert_eq!(deposit.type_(), Some(m.stake().script()));
        assert_eq!(data, &[0u8; 8]);
    }

    let (receipt, data) = tx.output(3).unwrap();
    assert_eq!(receipt.lock(), &owner());
    assert_eq!(receipt.type_(), Some(m.script()));
    let decoded = ReceiptData::decode(data).unwrap();
    assert_eq!(decoded.deposit_quantity(), 3);
    assert_eq!(decoded.deposit_amount(), amount);

    // logic, dao and udt deps
    assert_eq!(tx.cell_deps().count(), 3);
    assert_eq!(tx.token_handlers().count(), 1);
}

#[tokio::test]
async fn find_and_complete_minted_receipt() {
    let m = manager();
    let mut tx = TxSkeleton::new();
    m.deposit(&mut tx, 2, FixedPoint::from_ckb(2_082), &owner())
        .unwrap();

    // the receipt as the ledger reports it once the transaction is committed at block 42
    let (output, data) = tx.output(2).unwrap();
    let minted = Cell::new(
        OutPoint::new(buf32(0x42), 2),
        output.clone(),
        data.to_vec(),
        42,
    );

    let mut client = MockLedgerClient::new();
    let page = CellPage {
        cells: vec![minted.clone()],
        last_cursor: Cursor::default(),
    };
    client
        .expect_find_cells_page()
        .times(1)
        .returning(move |_, _, _, _| Ok(page.clone()));
    client
        .expect_get_transaction_header()
        .withf(|tx_hash| tx_hash == &buf32(0x42))
        .times(1)
        .returning(|_| Ok(Some(header(42))));

    let receipts: Vec<Receipt> = m
        .find_receipts(&client, &[owner(), owner()], FindReceiptsOptions::default())
        .try_collect()
        .await
        .unwrap();
    assert_eq!(receipts.len(), 1);
    assert_eq!(receipts[0].cell(), &minted);
    // args-free protocol lock: each deposit occupies 82 CKB
    assert_eq!(m.receipt_ickb_value(&receipts[0]), FixedPoint::from_ckb(4_000));

    let mut redeem = TxSkeleton::new();
    m.complete_deposit(&mut redeem, &receipts);
    let minted_in = header(42);
    assert_eq!(redeem.inputs(), &[minted]);
    assert_eq!(redeem.header_deps().collect::<Vec<_>>(), vec![minted_in.hash()]);
    assert_eq!(redeem.output_count(), 0);
}
