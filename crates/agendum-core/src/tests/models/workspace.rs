use crate::Workspace;

#[test]
fn test_workspace_new() {
    let workspace = Workspace::new("Personal".to_string());

    assert_eq!(workspace.name, "Personal");
    assert_eq!(workspace.created_at, workspace.updated_at);
}

#[test]
fn test_workspace_ids_are_unique() {
    let a = Workspace::new("One".to_string());
    let b = Workspace::new("Two".to_string());

    assert_ne!(a.id, b.id);
}
