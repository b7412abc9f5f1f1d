use super::Customer;

#[test]
fn test_factory_sets_id_and_name() {
    let customer = Customer::new_customer(1, "Jon Doe");

    assert_eq!(customer.id(), 1);
    assert_eq!(customer.name(), "Jon Doe");
}

#[test]
fn test_identified_by_replaces_id_and_keeps_name() {
    let customer = Customer::new_customer(0, "Jane Doe");

    let identified = customer.identified_by(42);

    assert_eq!(identified.id(), 42);
    assert_eq!(identified.name(), "Jane Doe");
}

#[test]
fn test_equality_is_field_wise() {
    let a = Customer::new_customer(1, "Jon Doe");
    let b = Customer::new_customer(1, "Jon Doe");
    let c = Customer::new_customer(2, "Jon Doe");

    assert_eq!(a, b);
    assert_ne!(a, c);
}
