//! Static HTML views. Templating is deliberately not a concern here;
//! every page is a fixed document and form targets are hard-wired.

pub const HOME: &str = r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="utf-8"><title>Segreti</title></head>
<body>
<h1>Segreti</h1>
<p>Keep your secrets behind a password.</p>
<p><a href="/register">Register</a> | <a href="/login">Login</a></p>
</body>
</html>
"#;

pub const LOGIN: &str = r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="utf-8"><title>Login - Segreti</title></head>
<body>
<h1>Login</h1>
<form action="/login" method="post">
  <label for="username">Email</label>
  <input type="email" id="username" name="username" required>
  <label for="password">Password</label>
  <input type="password" id="password" name="password" required>
  <button type="submit">Login</button>
</form>
<p><a href="/">Home</a></p>
</body>
</html>
"#;

pub const REGISTER: &str = r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="utf-8"><title>Register - Segreti</title></head>
<body>
<h1>Register</h1>
<form action="/register" method="post">
  <label for="username">Email</label>
  <input type="email" id="username" name="username" required>
  <label for="password">Password</label>
  <input type="password" id="password" name="password" required>
  <button type="submit">Register</button>
</form>
<p><a href="/">Home</a></p>
</body>
</html>
"#;

pub const SECRETS: &str = r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="utf-8"><title>Secrets - Segreti</title></head>
<body>
<h1>You've discovered the secret!</h1>
<p>Jack Bauer is my hero.</p>
<p><a href="/logout">Log out</a></p>
</body>
</html>
"#;
