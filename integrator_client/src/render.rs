use crate::models::Post;

/// Renderiza a lista de tweets carregada: separador, id e texto por item.
/// Lista vazia vira um aviso informativo no lugar da listagem.
pub fn render_posts(posts: &[Post]) -> String {
    if posts.is_empty() {
        return "ℹ️  Nenhum tweet carregado ainda.".to_string();
    }

    let mut out = String::new();
    for post in posts {
        out.push_str("---\n");
        out.push_str(&format!("Tweet ID: {}\n", post.id));
        out.push_str(&format!("{}\n", post.text));
    }
    out
}
