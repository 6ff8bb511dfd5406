mod common;

use anyhow::Result;
use common::{record_salary_and_food, run_script, test_service};

#[test]
fn test_add_and_view_transactions() -> Result<()> {
    let mut service = test_service();

    let output = run_script(
        &mut service,
        &["1", "1000", "salary", "2", "200", "  food ", "groceries", "3", "9"],
    )?;

    assert!(output.contains("Income of $1000.00 recorded."));
    assert!(output.contains("Expense of $200.00 recorded under Food."));
    assert!(output.contains("[2024-01-15 12:00:00] Income: $1000.00 - salary"));
    assert!(output.contains("[2024-01-15 12:00:00] Food: -$200.00 - groceries"));
    assert!(output.trim_end().ends_with("Exiting tracker. Goodbye!"));
    assert_eq!(service.transactions().len(), 2);

    Ok(())
}

#[test]
fn test_empty_history_message() -> Result<()> {
    let mut service = test_service();

    let output = run_script(&mut service, &["3", "9"])?;
    assert!(output.contains("No transactions recorded."));

    Ok(())
}

#[test]
fn test_summary_screen() -> Result<()> {
    let mut service = test_service();
    record_salary_and_food(&mut service)?;

    let output = run_script(&mut service, &["4", "9"])?;
    assert!(output.contains("--- Financial Summary ---"));
    assert!(output.contains("Total Income: $1000.00"));
    assert!(output.contains("Total Expenses: $250.00"));
    assert!(output.contains("Balance: $750.00"));

    Ok(())
}

#[test]
fn test_invalid_input_does_not_end_session() -> Result<()> {
    let mut service = test_service();

    let output = run_script(
        &mut service,
        &["banana", "1", "ten dollars", "1", "-5", "oops", "2", "0", "food", "", "9"],
    )?;

    assert!(output.contains("Invalid choice. Please try again."));
    assert!(output.contains("Invalid amount 'ten dollars': invalid money format"));
    assert!(output.contains("Income amount must be positive."));
    assert!(output.contains("Expense amount must be positive."));
    assert!(output.contains("Exiting tracker. Goodbye!"));
    assert!(service.transactions().is_empty());

    Ok(())
}

#[test]
fn test_blank_category_becomes_miscellaneous() -> Result<()> {
    let mut service = test_service();

    let output = run_script(&mut service, &["2", "12.5", "   ", "", "9"])?;
    assert!(output.contains("Expense of $12.50 recorded under Miscellaneous."));
    assert_eq!(service.transactions()[0].category().as_str(), "Miscellaneous");
    assert_eq!(service.transactions()[0].description(), "");

    Ok(())
}

#[test]
fn test_clear_history_from_menu() -> Result<()> {
    let mut service = test_service();
    record_salary_and_food(&mut service)?;

    let output = run_script(&mut service, &["8", "8", "3", "9"])?;
    assert_eq!(
        output
            .matches("All transaction history cleared successfully.")
            .count(),
        2
    );
    assert!(output.contains("No transactions recorded."));
    assert!(service.transactions().is_empty());

    Ok(())
}

#[test]
fn test_charts_from_menu() -> Result<()> {
    let mut service = test_service();
    record_salary_and_food(&mut service)?;

    let output = run_script(&mut service, &["5", "6", "9"])?;
    assert!(output.contains("Income vs Expenses"));
    assert!(output.contains("80.0%"));
    assert!(output.contains("20.0%"));
    assert!(output.contains("Spending by Category"));
    assert!(output.contains("$250.00"));

    Ok(())
}

#[test]
fn test_charts_on_empty_ledger() -> Result<()> {
    let mut service = test_service();

    let output = run_script(&mut service, &["5", "6", "9"])?;
    assert!(output.contains("No income or expenses to chart."));
    assert!(output.contains("No expenses to chart."));

    Ok(())
}

#[test]
fn test_end_of_input_exits_cleanly() -> Result<()> {
    let mut service = test_service();

    // Input ends in the middle of an "Add Income" dialog
    let output = run_script(&mut service, &["1"])?;
    assert!(!output.contains("Goodbye"));
    assert!(service.transactions().is_empty());

    Ok(())
}

#[test]
fn test_huge_incomes_are_rejected_not_fatal() -> Result<()> {
    let mut service = test_service();

    let output = run_script(
        &mut service,
        &["1", "90000000000000000", "a", "1", "90000000000000000", "b", "4", "9"],
    )?;

    assert!(output.contains("Amount is too large: total income would exceed the supported range."));
    assert!(output.contains("Total Income: $90000000000000000.00"));
    assert!(output.contains("Balance: $90000000000000000.00"));
    assert!(output.contains("Exiting tracker. Goodbye!"));
    assert_eq!(service.transactions().len(), 1);

    Ok(())
}

#[test]
fn test_amount_with_plus_sign() -> Result<()> {
    let mut service = test_service();

    let output = run_script(&mut service, &["1", "+50", "gift", "9"])?;
    assert!(output.contains("Income of $50.00 recorded."));
    assert_eq!(service.balance(), 5000);

    Ok(())
}

#[test]
fn test_view_omits_separator_for_empty_description() -> Result<()> {
    let mut service = test_service();
    service.record_income(1000, "")?;

    let output = run_script(&mut service, &["3", "9"])?;
    assert!(output.contains("[2024-01-15 12:00:00] Income: $10.00\n"));

    Ok(())
}
